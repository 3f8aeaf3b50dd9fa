//! Error types for seedscrub-core

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SanitizeError>;

#[derive(Error, Debug)]
pub enum SanitizeError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Placeholder is not a quotable http(s) URL: {0}")]
    InvalidPlaceholder(String),
}

impl SanitizeError {
    /// Classify a read failure, splitting out a missing file
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}
