//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl RepositoryError {
    /// True when stored bytes exist but cannot be decoded.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::Json(_) | Self::CorruptedData(_))
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
