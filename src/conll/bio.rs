//! Bracket-notation to BIO decoding.
//!
//! OntoNotes encodes spans with `(`, `)` and `*`: `(TAG` opens a span,
//! `*` continues it without restating the tag, `)` closes it, and `(TAG)`
//! opens and closes on a single token. The decoder walks one column left
//! to right with a single carried tag, so it can only represent flat,
//! non-overlapping spans. An opening marker seen while a span is still
//! open is rejected as malformed input.
use crate::error::{Error, SpanError};

/// Outside label, also the decoder's rest state.
const OUTSIDE: &str = "O";

/// Decode one column of span markers into an equal-length BIO sequence.
///
/// State resets at every call: a column never sees another column's spans,
/// and a sentence never sees another sentence's.
pub fn decode<S: AsRef<str>>(markers: &[S]) -> Result<Vec<String>, Error> {
    let mut labels = Vec::with_capacity(markers.len());
    let mut last_tag = OUTSIDE.to_string();

    for (index, marker) in markers.iter().enumerate() {
        let mut rest = marker.as_ref();

        let is_begin = rest.starts_with('(');
        if is_begin {
            rest = &rest[1..];
        }
        let is_end = rest.ends_with(')');
        if is_end {
            rest = &rest[..rest.len() - 1];
        }
        // continuation marker sits inside the closing paren: `*)`
        if rest.ends_with('*') {
            rest = &rest[..rest.len() - 1];
        }

        if is_begin && last_tag != OUTSIDE {
            // a second `(` with the previous span still open would need a
            // stack, the notation does not allow it
            return Err(Error::Span(SpanError {
                index,
                open_tag: last_tag,
                new_tag: rest.to_string(),
            }));
        }

        let tag = if rest.is_empty() {
            last_tag.clone()
        } else {
            rest.to_string()
        };

        if tag == OUTSIDE {
            labels.push(OUTSIDE.to_string());
        } else if is_begin {
            labels.push(format!("B-{}", tag));
        } else {
            labels.push(format!("I-{}", tag));
        }

        last_tag = if is_end { OUTSIDE.to_string() } else { tag };
    }

    Ok(labels)
}
