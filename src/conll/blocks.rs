//! Sentence block assembly.
//!
//! [Blocks] implements [Iterator] in order to lazily walk a file one
//! sentence at a time: finite, single pass, not restartable, suspension
//! only at physical line reads.
use std::io::BufRead;

use crate::conll::line::{Line, COMMENT_MARKER};
use crate::error::Error;

/// One data row of a sentence block, with its 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

/// One sentence worth of annotation rows. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub rows: Vec<Row>,
}

impl Block {
    /// Number of tokens in the sentence.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Groups consecutive data lines into [Block]s, bounded by blank lines.
///
/// Comment lines are dropped entirely: they neither terminate a block nor
/// count as one. End of input acts as an implicit boundary, flushing a
/// trailing unterminated block.
pub struct Blocks<R: BufRead> {
    reader: R,
    line_num: usize,
    buffer: Vec<Row>,
    done: bool,
}

impl<R: BufRead> Blocks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
            buffer: Vec::new(),
            done: false,
        }
    }

    /// Read the next physical line, `None` at EOF.
    fn next_line(&mut self) -> Option<Result<String, Error>> {
        let mut s = String::new();
        match self.reader.read_line(&mut s) {
            Ok(0) => None,
            Err(e) => Some(Err(Error::Io(e))),
            _ => {
                self.line_num += 1;
                Some(Ok(s))
            }
        }
    }

    fn flush(&mut self) -> Option<Block> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(Block {
                rows: std::mem::take(&mut self.buffer),
            })
        }
    }
}

impl<R: BufRead> Iterator for Blocks<R> {
    type Item = Result<Block, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.next_line() {
                None => {
                    self.done = true;
                    return self.flush().map(Ok);
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Some(Ok(raw)) => match Line::classify(&raw, COMMENT_MARKER) {
                    Line::Comment => continue,
                    Line::Fields(fields) => self.buffer.push(Row {
                        line: self.line_num,
                        fields,
                    }),
                    Line::Boundary => {
                        if let Some(block) = self.flush() {
                            return Some(Ok(block));
                        }
                        // consecutive boundaries yield nothing
                    }
                },
            }
        }
    }
}
