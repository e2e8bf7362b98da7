use crate::error::{ErrorSeverity, GameError};
use crate::session::SaveData;

/// Errors reported by a [`ProgressStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressError {
    /// The backing store could not be reached or written.
    #[error("progress store unavailable: {0}")]
    Unavailable(String),

    /// Stored progress exists but cannot be decoded.
    #[error("stored progress is corrupt: {0}")]
    Corrupt(String),
}

impl GameError for ProgressError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unavailable(_) => ErrorSeverity::Recoverable,
            Self::Corrupt(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "PROGRESS_UNAVAILABLE",
            Self::Corrupt(_) => "PROGRESS_CORRUPT",
        }
    }
}

/// Save slot for campaign progress.
///
/// The session never propagates these errors: a failed load is treated as
/// "no save", a failed save becomes a battle log line.
pub trait ProgressStore {
    /// Loads the saved progress, `Ok(None)` when nothing was saved yet.
    fn load_progress(&self) -> Result<Option<SaveData>, ProgressError>;

    /// Replaces the saved progress.
    fn save_progress(&mut self, data: &SaveData) -> Result<(), ProgressError>;
}

/// A bare slot is enough for headless sessions and tests.
impl ProgressStore for Option<SaveData> {
    fn load_progress(&self) -> Result<Option<SaveData>, ProgressError> {
        Ok(self.clone())
    }

    fn save_progress(&mut self, data: &SaveData) -> Result<(), ProgressError> {
        *self = Some(data.clone());
        Ok(())
    }
}
