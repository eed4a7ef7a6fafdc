//! Conversion of merged split files into the three derived formats.
use std::convert::TryFrom;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{error, info};

use crate::conll::{Blocks, SentenceRecord};
use crate::error::Error;
use crate::io::FormatWriters;
use crate::lang::{Lang, Split};

/// Convert one split: read `<src>/<lang>/<split>.txt` sentence by
/// sentence and append each one to the three format files under `dst`.
///
/// Strictly sequential; output order is input sentence order. The first
/// malformed block aborts the whole split, nothing is guessed or padded.
/// Returns the number of converted sentences.
pub fn convert_split(src: &Path, dst: &Path, lang: Lang, split: Split) -> Result<usize, Error> {
    let mut path = src.to_path_buf();
    path.push(lang.name());
    path.push(format!("{}.txt", split.short_tag()));

    info!("[{}] converting {:?}", lang.name(), path);
    let reader = BufReader::new(File::open(&path)?);
    let mut writers = FormatWriters::new(dst, lang, split)?;

    let mut sentences = 0;
    for block in Blocks::new(reader) {
        let record = SentenceRecord::try_from(block?)?;
        writers.write_sentence(&record)?;
        sentences += 1;
    }
    writers.flush()?;

    info!(
        "[{}] {}: {} sentences converted",
        lang.name(),
        split.short_tag(),
        sentences
    );
    Ok(sentences)
}

/// Convert all three splits of one language.
pub fn convert(src: &Path, dst: &Path, lang: Lang) -> Result<(), Error> {
    for split in Split::ALL {
        if let Err(e) = convert_split(src, dst, lang, split) {
            error!(
                "[{}] {}: conversion aborted: {:?}",
                lang.name(),
                split.short_tag(),
                e
            );
            return Err(e);
        }
    }
    Ok(())
}
