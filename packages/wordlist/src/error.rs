//! Typed errors for the word-list library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell
//! a missing source apart from a failed write.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting or writing a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// Source file does not exist
    #[error("file not found at {}", path.display())]
    MissingInput { path: PathBuf },

    /// Source file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not valid UTF-8
    #[error("invalid UTF-8 in {} at line {line}", path.display())]
    Decode { path: PathBuf, line: usize },

    /// Output directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("error writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or parsing failed
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A vocabulary file in a catalog directory is malformed
    #[error("invalid vocabulary file {}: {reason}", path.display())]
    Catalog { path: PathBuf, reason: String },
}

/// Coarse failure classes surfaced to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source file is absent
    MissingInput,
    /// Any other failure while reading or decoding input
    DecodeOrIo,
    /// Serializing or writing output failed
    WriteFailure,
}

impl WordListError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput { .. } => ErrorKind::MissingInput,
            Self::Read { .. } | Self::Decode { .. } | Self::Catalog { .. } => ErrorKind::DecodeOrIo,
            Self::CreateDir { .. } | Self::Write { .. } | Self::Serialize(_) => {
                ErrorKind::WriteFailure
            }
        }
    }
}

/// Result type alias for word-list operations.
pub type Result<T> = std::result::Result<T, WordListError>;
