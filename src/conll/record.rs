//! Row-major to column-major transposition of sentence blocks.
use std::convert::TryFrom;

use crate::conll::blocks::Block;
use crate::error::{Error, SchemaError};

/// Columns 0..=10 are fixed, then one column per annotated predicate,
/// then coreference. 12 is therefore the minimum row width.
const FIXED_FIELDS: usize = 12;

/// One sentence of OntoNotes annotation, column major.
///
/// Every column has length equal to the token count of the block it was
/// transposed from. The number of predicate-argument columns varies per
/// sentence and can be zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    pub doc_id: Vec<String>,
    pub part_id: Vec<String>,
    pub word_id: Vec<String>,
    pub word: Vec<String>,
    pub pos_tag: Vec<String>,
    pub bracketed: Vec<String>,
    pub predicate_lemma: Vec<String>,
    pub predicate_frameset: Vec<String>,
    pub word_sense: Vec<String>,
    pub speaker: Vec<String>,
    pub ner_tag: Vec<String>,
    pub predicate_arguments: Vec<Vec<String>>,
    pub co_reference: Vec<String>,
}

impl SentenceRecord {
    /// Number of tokens in the sentence.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl TryFrom<Block> for SentenceRecord {
    type Error = Error;

    /// Transpose row `i`, field `j` into column `j`, position `i`.
    ///
    /// Fails with [SchemaError] when rows disagree on field count or when
    /// rows are too narrow to carry the fixed columns. Never pads or
    /// truncates.
    fn try_from(block: Block) -> Result<Self, Self::Error> {
        let width = match block.rows.first() {
            Some(row) => row.fields.len(),
            None => return Err(Error::Custom("empty sentence block".to_string())),
        };

        for row in &block.rows {
            if row.fields.len() != width {
                return Err(Error::Schema(SchemaError {
                    line: row.line,
                    expected: width,
                    found: row.fields.len(),
                }));
            }
        }
        if width < FIXED_FIELDS {
            let first = &block.rows[0];
            return Err(Error::Schema(SchemaError {
                line: first.line,
                expected: FIXED_FIELDS,
                found: width,
            }));
        }

        let len = block.rows.len();
        let mut columns: Vec<Vec<String>> =
            (0..width).map(|_| Vec::with_capacity(len)).collect();
        for row in block.rows {
            for (column, field) in columns.iter_mut().zip(row.fields) {
                column.push(field);
            }
        }

        // width >= FIXED_FIELDS holds here, so the unwraps cannot fire
        let co_reference = columns.pop().unwrap();
        let predicate_arguments = columns.split_off(11);
        let mut columns = columns.into_iter();
        let mut next = || columns.next().unwrap();

        Ok(SentenceRecord {
            doc_id: next(),
            part_id: next(),
            word_id: next(),
            word: next(),
            pos_tag: next(),
            bracketed: next(),
            predicate_lemma: next(),
            predicate_frameset: next(),
            word_sense: next(),
            speaker: next(),
            ner_tag: next(),
            predicate_arguments,
            co_reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::conll::blocks::{Blocks, Row};

    fn row(line: usize, fields: &[&str]) -> Row {
        Row {
            line,
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// A minimal row: the 11 fixed columns, `n_args` argument columns,
    /// then coreference.
    fn onto_row(line: usize, word: &str, n_args: usize) -> Row {
        let mut fields = vec![
            "doc", "0", "0", word, "NN", "*", "-", "-", "-", "spk", "*",
        ]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
        fields[2] = (line - 1).to_string();
        for _ in 0..n_args {
            fields.push("*".to_string());
        }
        fields.push("-".to_string());
        Row { line, fields }
    }

    #[test]
    fn transpose_binds_columns() {
        let block = Block {
            rows: vec![onto_row(1, "He", 1), onto_row(2, "ran", 1)],
        };
        let record = SentenceRecord::try_from(block).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.word, vec!["He", "ran"]);
        assert_eq!(record.pos_tag, vec!["NN", "NN"]);
        assert_eq!(record.predicate_arguments.len(), 1);
        assert_eq!(record.predicate_arguments[0], vec!["*", "*"]);
        assert_eq!(record.co_reference, vec!["-", "-"]);
    }

    #[test]
    fn zero_argument_columns() {
        let block = Block {
            rows: vec![onto_row(1, "Yes", 0)],
        };
        let record = SentenceRecord::try_from(block).unwrap();
        assert!(record.predicate_arguments.is_empty());
        assert_eq!(record.co_reference, vec!["-"]);
    }

    #[test]
    fn argument_count_follows_width() {
        for n_args in 0..4 {
            let block = Block {
                rows: vec![onto_row(1, "w", n_args)],
            };
            let record = SentenceRecord::try_from(block).unwrap();
            assert_eq!(record.predicate_arguments.len(), n_args);
        }
    }

    #[test]
    fn inconsistent_width_is_a_schema_error() {
        let block = Block {
            rows: vec![onto_row(4, "He", 1), row(6, &["doc", "0", "1", "ran"])],
        };
        match SentenceRecord::try_from(block) {
            Err(Error::Schema(e)) => {
                assert_eq!(e.line, 6);
                assert_eq!(e.expected, 13);
                assert_eq!(e.found, 4);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn narrow_rows_are_a_schema_error() {
        let block = Block {
            rows: vec![row(2, &["doc", "0", "0", "He", "NN"])],
        };
        assert!(matches!(
            SentenceRecord::try_from(block),
            Err(Error::Schema(_))
        ));
    }

    #[test]
    fn from_text_end_to_end() {
        let text = "doc 0 0 He PRP * - - - spk * (ARG0*) -\n\
                    doc 0 1 ran VBD * run 01 - spk * (V*) -\n\n";
        let mut blocks = Blocks::new(Cursor::new(text));
        let record = SentenceRecord::try_from(blocks.next().unwrap().unwrap()).unwrap();
        assert_eq!(record.word, vec!["He", "ran"]);
        assert_eq!(record.predicate_lemma, vec!["-", "run"]);
        assert_eq!(record.predicate_frameset, vec!["-", "01"]);
        assert_eq!(record.predicate_arguments, vec![vec!["(ARG0*)", "(V*)"]]);
    }
}
