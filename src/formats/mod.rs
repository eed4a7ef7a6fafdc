/*! Output format emitters.

Three independent projections of a [SentenceRecord] into textual blocks:

- [conllu]: dependency skeleton, CoNLL-U shaped (placeholder heads).
- [ner]: word + BIO named-entity tag.
- [srl]: word + predicate indicator + one BIO column per predicate.

All three share the same block convention: a `# ` header line carrying the
sentence's words joined without separator, a tab-separated body with one
token per line, then a blank line.
!*/
pub mod conllu;
pub mod ner;
pub mod srl;

use itertools::Itertools;

use crate::conll::SentenceRecord;

/// Header line shared by the three formats.
fn header(record: &SentenceRecord) -> String {
    format!("# {}\n", record.word.concat())
}

/// Assemble a block: header, then rows of tab-joined columns, then a
/// blank line. All columns must have the record's token count.
fn block(record: &SentenceRecord, columns: &[&[String]]) -> String {
    let mut out = header(record);
    for i in 0..record.len() {
        let row = columns.iter().map(|c| c[i].as_str()).join("\t");
        out.push_str(&row);
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
pub(crate) mod testutil {
    use crate::conll::SentenceRecord;

    /// A synthetic record with the given words, NER markers and
    /// predicate-argument columns.
    pub fn record(
        words: &[&str],
        ner: &[&str],
        frameset: &[&str],
        args: &[&[&str]],
    ) -> SentenceRecord {
        let n = words.len();
        let strings = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        SentenceRecord {
            doc_id: vec!["doc".to_string(); n],
            part_id: vec!["0".to_string(); n],
            word_id: (0..n).map(|i| i.to_string()).collect(),
            word: strings(words),
            pos_tag: vec!["NN".to_string(); n],
            bracketed: vec!["*".to_string(); n],
            predicate_lemma: vec!["-".to_string(); n],
            predicate_frameset: strings(frameset),
            word_sense: vec!["-".to_string(); n],
            speaker: vec!["spk".to_string(); n],
            ner_tag: strings(ner),
            predicate_arguments: args.iter().map(|a| strings(a)).collect(),
            co_reference: vec!["-".to_string(); n],
        }
    }
}
