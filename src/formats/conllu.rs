//! Dependency-skeleton emitter, CoNLL-U shaped.
//!
//! The corpus carries no dependency parse, so this projection fills the
//! tree-structured fields with stand-ins: the word doubles as its own
//! lemma, the POS tag fills both the coarse and fine slots, and the head
//! column restates each token's own 0-based position. Consumers must not
//! treat the head/deprel columns as real dependency structure.
use crate::conll::SentenceRecord;

use super::block;

/// Emit one 10-column CoNLL-U block.
pub fn emit(record: &SentenceRecord) -> String {
    let n = record.len();
    let placeholder = vec!["_".to_string(); n];
    let head: Vec<String> = (0..n).map(|i| i.to_string()).collect();

    block(
        record,
        &[
            &record.word_id,
            &record.word,
            &record.word, // lemma: no lemmatization available
            &record.pos_tag,
            &record.pos_tag,
            &placeholder, // feats
            &head,        // own position, not a parse
            &placeholder, // deprel
            &placeholder, // deps
            &placeholder, // misc
        ],
    )
}
