//! Named-entity emitter: word + BIO tag.
use crate::conll::{bio, SentenceRecord};
use crate::error::Error;

/// Emit one two-column NER block. Fails if the NER column's bracket
/// notation is malformed.
pub fn emit(record: &SentenceRecord) -> Result<String, Error> {
    let tags = bio::decode(&record.ner_tag)?;
    Ok(super::block(record, &[&record.word, &tags]))
}
