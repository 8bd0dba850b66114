//! Error Types
//!
//! Failures the loaders can surface when strict mode is requested.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse failure classes.
///
/// Both are recoverable: in the default (non-strict) policy either one
/// collapses into the fallback capability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No readable file at the given path
    NotFound,
    /// File content is not well-formed JSON, or the parsed value is unusable
    InvalidInput,
}

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("manifest file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The underlying parse failure, unchanged.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("manifest root must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl DetectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DetectError::NotFound(_) => ErrorKind::NotFound,
            DetectError::Read { .. } | DetectError::Parse(_) | DetectError::NotAnObject(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}

/// Result type for loader operations.
pub type DetectResult<T> = Result<T, DetectError>;
