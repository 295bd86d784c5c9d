use std::path::PathBuf;
use thiserror::Error;

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

#[derive(Error, Debug)]
pub enum LexiconError {
    /// Keyword codes are bucketed by their first digit
    #[error("Iconclass code needs to start with a digit: {0:?}")]
    InvalidCode(String),

    #[error("{} has no {column:?} column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid file pattern: {0}")]
    Pattern(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LexiconError {
    pub fn invalid_code(code: impl Into<String>) -> Self {
        Self::InvalidCode(code.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
