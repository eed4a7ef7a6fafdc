/*! CoNLL record parsing.

Decoding of the OntoNotes-style column format, bottom up:

- [line]: classifies physical lines (comment, sentence boundary, data).
- [blocks]: groups data lines into sentence blocks.
- [record]: transposes a block into a column-major [record::SentenceRecord].
- [bio]: decodes bracket-notation span columns into BIO label sequences.
!*/
pub mod bio;
pub mod blocks;
pub mod line;
pub mod record;

pub use blocks::{Block, Blocks};
pub use record::SentenceRecord;
