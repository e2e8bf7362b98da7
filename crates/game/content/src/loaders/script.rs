//! Dialogue script loader.

use std::path::Path;

use anyhow::Context;

use crate::catalog::{Script, ScriptData};
use crate::loaders::{LoadResult, read_file};

/// Script compiled into the crate.
pub(crate) const BUILTIN_SCRIPT: &str = include_str!("../../data/script.ron");

/// Loader for dialogue scripts.
pub struct ScriptLoader;

impl ScriptLoader {
    /// Load a script from a RON file.
    pub fn load(path: &Path) -> LoadResult<Script> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("invalid script in {}", path.display()))
    }

    /// Parse script RON text.
    pub fn parse(content: &str) -> LoadResult<Script> {
        let data: ScriptData = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script RON: {}", e))?;
        Ok(Script::new(data))
    }

    /// The dialogue shipped with the game.
    pub fn builtin() -> LoadResult<Script> {
        Self::parse(BUILTIN_SCRIPT).context("built-in script")
    }
}
