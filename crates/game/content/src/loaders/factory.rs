//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::GameConfig;

use crate::catalog::{Roster, Script};
use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, ScriptLoader};

/// Everything the runtime needs from content.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub roster: Roster,
    pub script: Script,
    pub config: GameConfig,
}

/// Content factory that loads game content either from the embedded data or
/// from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── roster.ron
/// ├── script.ron
/// └── config.toml   (optional)
/// ```
///
/// Files missing from a data directory fall back to the embedded defaults.
#[derive(Clone, Debug, Default)]
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Factory over the data compiled into the crate.
    pub fn builtin() -> Self {
        Self { data_dir: None }
    }

    /// Factory reading from `data_dir`.
    pub fn from_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Load the roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        match self.existing("roster.ron") {
            Some(path) => RosterLoader::load(&path),
            None => RosterLoader::builtin(),
        }
    }

    /// Load the dialogue from `script.ron`.
    pub fn load_script(&self) -> LoadResult<Script> {
        match self.existing("script.ron") {
            Some(path) => ScriptLoader::load(&path),
            None => ScriptLoader::builtin(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing("config.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => Ok(GameConfig::default()),
        }
    }

    /// Load roster, script and config together.
    pub fn load(&self) -> LoadResult<GameContent> {
        Ok(GameContent {
            roster: self.load_roster().context("loading roster")?,
            script: self.load_script().context("loading script")?,
            config: self.load_config().context("loading config")?,
        })
    }

    /// Returns the data directory path, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn existing(&self, file_name: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(file_name))
            .filter(|path| path.is_file())
    }
}
