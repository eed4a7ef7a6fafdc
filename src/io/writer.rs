//! Per-split output files for the three derived formats.
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::conll::SentenceRecord;
use crate::error::Error;
use crate::formats;
use crate::lang::{Lang, Split};

/// Holds the three open output files of one (language, split) pair.
///
/// Layout under the destination root:
/// `conllu/<lang>/<split>.conllu`, `ner/<lang>/<split>.bio`,
/// `srl/<lang>/<split>.txt`. Files are created eagerly (truncating any
/// previous run) and appended to in sentence order; handles are released
/// on drop.
pub struct FormatWriters {
    conllu: File,
    ner: File,
    srl: File,
}

impl FormatWriters {
    pub fn new(dst: &Path, lang: Lang, split: Split) -> Result<Self, Error> {
        Ok(Self {
            conllu: Self::open(dst, "conllu", lang, split, "conllu")?,
            ner: Self::open(dst, "ner", lang, split, "bio")?,
            srl: Self::open(dst, "srl", lang, split, "txt")?,
        })
    }

    fn open(
        dst: &Path,
        format: &str,
        lang: Lang,
        split: Split,
        extension: &str,
    ) -> Result<File, Error> {
        let mut path: PathBuf = dst.to_path_buf();
        path.push(format);
        path.push(lang.name());
        create_dir_all(&path)?;
        path.push(format!("{}.{}", split.short_tag(), extension));

        info!("creating {:?}", path);
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        Ok(options.open(path)?)
    }

    /// Project one sentence into all three formats and append the blocks.
    ///
    /// An emitter error leaves the files as they were before this
    /// sentence: nothing partial is written.
    pub fn write_sentence(&mut self, record: &SentenceRecord) -> Result<(), Error> {
        let conllu = formats::conllu::emit(record);
        let ner = formats::ner::emit(record)?;
        let srl = formats::srl::emit(record)?;

        self.conllu.write_all(conllu.as_bytes())?;
        self.ner.write_all(ner.as_bytes())?;
        self.srl.write_all(srl.as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.conllu.flush()?;
        self.ner.flush()?;
        self.srl.flush()?;
        Ok(())
    }
}
