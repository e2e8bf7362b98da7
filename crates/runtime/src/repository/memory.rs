//! In-memory SaveRepository implementation for tests and local runs.

use std::sync::RwLock;

use game_core::SaveData;

use super::{RepositoryError, Result, SaveRepository};

/// In-memory implementation of SaveRepository.
///
/// Used when persistence is disabled; progress lives as long as the runtime.
#[derive(Debug, Default)]
pub struct InMemorySaveRepository {
    slot: RwLock<Option<SaveData>>,
}

impl InMemorySaveRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with progress already stored.
    pub fn with_save(data: SaveData) -> Self {
        Self {
            slot: RwLock::new(Some(data)),
        }
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, data: &SaveData) -> Result<()> {
        let mut slot = self.slot.write().map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(data.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveData>> {
        let slot = self.slot.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn exists(&self) -> bool {
        self.slot
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self.slot.write().map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}
