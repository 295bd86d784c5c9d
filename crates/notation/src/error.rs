use std::path::PathBuf;
use thiserror::Error;

/// Result type for notation operations
pub type Result<T> = std::result::Result<T, NotationError>;

/// Errors raised while loading, editing or writing a notation document
#[derive(Error, Debug)]
pub enum NotationError {
    /// No `N <code>` line exists for the requested entry
    #[error("Entry not found: N {0}")]
    EntryNotFound(String),

    /// The entry has no `$` before the next entry or the end of the buffer
    #[error("Entry N {code} starting at line {line} has no `$` terminator")]
    UnterminatedEntry { code: String, line: usize },

    /// Reading or writing the notation file failed
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NotationError {
    pub fn entry_not_found(code: impl Into<String>) -> Self {
        Self::EntryNotFound(code.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the batch may carry on after this error.
    ///
    /// Missing and malformed entries only skip one insertion; I/O failures end the run.
    #[must_use]
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::EntryNotFound(_) | Self::UnterminatedEntry { .. }
        )
    }
}
