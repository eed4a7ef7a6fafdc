//! Collection of raw `*gold_conll` files into one merged file per split.
//!
//! The conll-2012 release scatters annotation files across a
//! `v4/data/<split>/data/<language>/.../<domain>/...` tree. Collection
//! walks that tree, keeps annotation rows, replaces everything else
//! (comments included) with sentence boundaries, and concatenates the
//! result into `<dst>/<lang>/<split>.txt`, the input the converter
//! expects.
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use glob::glob;
use log::info;

use crate::error::Error;
use crate::lang::{check_domains, Lang, Split};

/// Corpus release version directory.
const VERSION: &str = "v4";

/// Rows narrower than this are not annotation rows (the raw files carry
/// 11 fixed columns at minimum, before argument and coreference columns).
const MIN_RAW_FIELDS: usize = 11;

/// Counters reported after collecting one split.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectStats {
    pub sentences: usize,
    pub tokens: usize,
}

/// Collect one split into `<dst>/<lang>/<split short tag>.txt`.
///
/// `domains` is the validated genre selection; files outside it are
/// skipped.
pub fn collect_split(
    src: &Path,
    dst: &Path,
    lang: Lang,
    split: Split,
    domains: &[&str],
) -> Result<CollectStats, Error> {
    let mut pattern = src.to_path_buf();
    for part in [
        VERSION,
        "data",
        split.corpus_tag(),
        "data",
        lang.name(),
        "**",
        "*gold_conll",
    ] {
        pattern.push(part);
    }
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("non-utf8 source path {:?}", pattern)))?
        .to_string();

    let out_dir = dst.join(lang.name());
    create_dir_all(&out_dir)?;
    let out_path = out_dir.join(format!("{}.txt", split.short_tag()));
    let mut out = BufWriter::new(File::create(&out_path)?);

    let mut stats = CollectStats::default();
    let mut files: Vec<PathBuf> = glob(&pattern)?.collect::<Result<_, _>>()?;
    files.sort();

    for file in files.iter().filter(|f| in_domains(f, domains)) {
        let reader = BufReader::new(File::open(file)?);
        for line in reader.lines() {
            let line = line?;
            if line.split_whitespace().count() >= MIN_RAW_FIELDS {
                out.write_all(line.as_bytes())?;
                out.write_all(b"\n")?;
                stats.tokens += 1;
            } else {
                out.write_all(b"\n")?;
                if !line.starts_with('#') {
                    stats.sentences += 1;
                }
            }
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!(
        "[{}] {:?}: {} sentences, {} tokens",
        lang.name(),
        out_path,
        stats.sentences,
        stats.tokens
    );
    Ok(stats)
}

/// Collect all three splits of one language.
///
/// Domain selectors are validated before any file is touched; an empty
/// selection means all domains.
pub fn collect(src: &Path, dst: &Path, lang: Lang, domains: &[String]) -> Result<(), Error> {
    let domains = check_domains(domains)?;
    for split in Split::ALL {
        collect_split(src, dst, lang, split, &domains)?;
    }
    Ok(())
}

/// True when one of the path's directory components is a selected domain.
fn in_domains(path: &Path, domains: &[&str]) -> bool {
    path.components().any(|c| match c {
        Component::Normal(c) => c.to_str().map_or(false, |c| domains.contains(&c)),
        _ => false,
    })
}
