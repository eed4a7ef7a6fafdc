//! Physical line classification.

/// Default comment marker of OntoNotes `*gold_conll` files
/// (`#begin document`/`#end document` lines).
pub const COMMENT_MARKER: &str = "#";

/// Classification of one physical line of a CoNLL file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Starts with the comment marker. Skipped unconditionally, never
    /// reaches the block assembler's buffer.
    Comment,
    /// Empty after whitespace trimming. Terminates the current sentence.
    Boundary,
    /// A data line, split on whitespace.
    Fields(Vec<String>),
}

impl Line {
    /// Classify a raw line. Pure, no side effects.
    pub fn classify(raw: &str, marker: &str) -> Line {
        if raw.starts_with(marker) {
            return Line::Comment;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Line::Boundary
        } else {
            Line::Fields(trimmed.split_whitespace().map(String::from).collect())
        }
    }
}
