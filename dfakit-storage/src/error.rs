//! Storage error types.

use dfakit_core::CoreError;
use thiserror::Error;

/// Errors from reading or writing a persisted description.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The description could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The description is not well-formed at the token level.
    #[error("parse error at token {token}: {reason}")]
    Parse { token: usize, reason: String },

    /// The description is well-formed but structurally invalid.
    #[error("invalid definition: {0}")]
    Core(#[from] CoreError),
}

impl StorageError {
    /// Returns a stable error code suitable for machine consumption.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io(_) => "SOURCE_UNAVAILABLE",
            StorageError::Parse { .. } => "PARSE_ERROR",
            StorageError::Core(e) => e.error_code(),
        }
    }
}
