//! Language, split and domain selectors.
//!
//! OntoNotes 5.0 (conll-2012 release) covers three languages and six genre
//! domains. Selectors are validated here, before any file I/O begins.
use std::collections::HashSet;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::Error;

lazy_static! {

    /// Genre domains present in the conll-2012 distribution.
    pub static ref DOMAINS: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("bc");
        m.insert("bn");
        m.insert("mz");
        m.insert("nw");
        m.insert("tc");
        m.insert("wb");
        m
    };
}

/// Languages of the OntoNotes corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    English,
    Chinese,
    Arabic,
}

impl Lang {
    /// Directory name used by the corpus layout and by our outputs.
    pub fn name(&self) -> &'static str {
        match self {
            Lang::English => "english",
            Lang::Chinese => "chinese",
            Lang::Arabic => "arabic",
        }
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(Lang::English),
            "chinese" => Ok(Lang::Chinese),
            "arabic" => Ok(Lang::Arabic),
            other => Err(Error::UnknownLang(format!(
                "{} (supported: english, chinese, arabic)",
                other
            ))),
        }
    }
}

/// Corpus splits.
///
/// The conll-2012 tree names the dev split `development`, while the derived
/// training files use the short `dev` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Development,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Development, Split::Test];

    /// Directory tag inside the conll-2012 tree.
    pub fn corpus_tag(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Development => "development",
            Split::Test => "test",
        }
    }

    /// Tag used for collected and converted file names.
    pub fn short_tag(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Development => "dev",
            Split::Test => "test",
        }
    }
}

/// Validate domain selectors against [struct@DOMAINS].
///
/// An empty selection means "all domains". Rejection happens before any
/// file is opened.
pub fn check_domains(domains: &[String]) -> Result<Vec<&str>, Error> {
    if domains.is_empty() {
        let mut all: Vec<&str> = DOMAINS.iter().copied().collect();
        all.sort_unstable();
        return Ok(all);
    }

    let mut checked = Vec::with_capacity(domains.len());
    for d in domains {
        match DOMAINS.get(d.as_str()) {
            Some(d) => checked.push(*d),
            None => {
                return Err(Error::UnknownDomain(format!(
                    "{} (supported: bc, bn, mz, nw, tc, wb)",
                    d
                )))
            }
        }
    }
    checked.sort_unstable();
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_from_str() {
        assert_eq!(Lang::from_str("chinese").unwrap(), Lang::Chinese);
        assert!(matches!(
            Lang::from_str("klingon"),
            Err(Error::UnknownLang(_))
        ));
    }

    #[test]
    fn lang_error_lists_valid_values() {
        let err = Lang::from_str("german").unwrap_err();
        match err {
            Error::UnknownLang(msg) => assert!(msg.contains("english")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn split_tags() {
        assert_eq!(Split::Development.corpus_tag(), "development");
        assert_eq!(Split::Development.short_tag(), "dev");
        assert_eq!(Split::Train.short_tag(), "train");
    }

    #[test]
    fn domains_empty_means_all() {
        let all = check_domains(&[]).unwrap();
        assert_eq!(all, vec!["bc", "bn", "mz", "nw", "tc", "wb"]);
    }

    #[test]
    fn domains_rejected() {
        let bad = vec!["nw".to_string(), "xx".to_string()];
        assert!(matches!(
            check_domains(&bad),
            Err(Error::UnknownDomain(_))
        ));
    }
}
