use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures surfaced by the record store. Nothing is retried internally.
#[derive(Debug)]
pub enum RecordsError {
    /// The text matched none of the accepted date formats.
    InvalidDateFormat(String),
    FileNotFound(PathBuf),
    Io { path: PathBuf, source: io::Error },
    /// A row that does not hold exactly six fields. `line` is 1-based.
    MalformedRecord { line: u64, fields: usize },
    Csv(csv::Error),
}

impl RecordsError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => RecordsError::FileNotFound(path),
            _ => RecordsError::Io { path, source },
        }
    }
}

impl fmt::Display for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordsError::InvalidDateFormat(text) => {
                write!(f, "invalid date format: {:?}", text)
            }
            RecordsError::FileNotFound(path) => {
                write!(f, "file not found: {}", path.display())
            }
            RecordsError::Io { path, source } => {
                write!(f, "i/o error on {}: {}", path.display(), source)
            }
            RecordsError::MalformedRecord { line, fields } => write!(
                f,
                "malformed record on line {}: expected 6 fields, found {}",
                line, fields
            ),
            RecordsError::Csv(error) => write!(f, "csv error: {}", error),
        }
    }
}

impl std::error::Error for RecordsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordsError::Io { source, .. } => Some(source),
            RecordsError::Csv(error) => Some(error),
            _ => None,
        }
    }
}

impl From<csv::Error> for RecordsError {
    fn from(error: csv::Error) -> Self {
        RecordsError::Csv(error)
    }
}
