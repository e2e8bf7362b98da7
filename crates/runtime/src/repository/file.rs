//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::SaveData;

use super::{RepositoryError, Result, SaveRepository};

/// File-based implementation of SaveRepository.
///
/// # File Format
///
/// Progress is stored as pretty-printed JSON with camelCase keys:
///
/// ```text
/// { "stage": 2, "recruitsAdded": 1, "party": [{ "name": "...", "currentHealth": 40, "maxHealth": 150 }] }
/// ```
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash never leaves a half-written save behind.
#[derive(Debug, Clone)]
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Create a repository writing to `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, data: &SaveData) -> Result<()> {
        let temp_path = self.temp_path();

        let bytes =
            serde_json::to_vec_pretty(data).map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved progress (stage {}) to {}", data.stage, self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Option<SaveData>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(RepositoryError::CorruptedData(format!(
                "{} is empty",
                self.path.display()
            )));
        }

        let data: SaveData =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!("Loaded progress (stage {}) from {}", data.stage, self.path.display());

        Ok(Some(data))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted progress at {}", self.path.display());
        }

        Ok(())
    }
}
