//! Repository contract for saving and loading campaign progress.

use game_core::SaveData;

use super::Result;

/// Single-slot progress persistence.
///
/// `load` returns `Ok(None)` when nothing has been saved yet; decoding
/// problems are errors so callers can tell "empty" from "broken".
pub trait SaveRepository: Send + Sync {
    /// Replace the stored progress.
    fn save(&self, data: &SaveData) -> Result<()>;

    /// Load the stored progress, if any.
    fn load(&self) -> Result<Option<SaveData>>;

    /// Check whether progress has been stored.
    fn exists(&self) -> bool;

    /// Remove the stored progress.
    fn delete(&self) -> Result<()>;
}
