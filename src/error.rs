//! Error enum
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    UnknownLang(String),
    UnknownDomain(String),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Schema(SchemaError),
    Span(SpanError),
    Custom(String),
}

/// A sentence block whose rows disagree on field count.
///
/// `line` is the physical (1-based) line number of the first offending row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub line: usize,
    pub expected: usize,
    pub found: usize,
}

/// A bracket-notation column opening a span while another one is still open.
///
/// The scalar-state decoder cannot represent nested or overlapping spans,
/// so this is rejected rather than silently mislabeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanError {
    pub index: usize,
    pub open_tag: String,
    pub new_tag: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::UnknownLang(s) => write!(f, "unknown language: {}", s),
            Error::UnknownDomain(s) => write!(f, "unknown domain: {}", s),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {}", e),
            Error::Schema(e) => write!(
                f,
                "schema error at line {}: expected {} fields, found {}",
                e.line, e.expected, e.found
            ),
            Error::Span(e) => write!(
                f,
                "span error at token {}: ({} opened while ({} is still open",
                e.index, e.new_tag, e.open_tag
            ),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<SchemaError> for Error {
    fn from(e: SchemaError) -> Error {
        Error::Schema(e)
    }
}

impl From<SpanError> for Error {
    fn from(e: SpanError) -> Error {
        Error::Span(e)
    }
}
