//! Roster loader.
//!
//! Loads party, recruit and stage definitions from RON.

use std::path::Path;

use anyhow::Context;

use crate::catalog::{Roster, RosterData};
use crate::loaders::{LoadResult, read_file};

/// Roster compiled into the crate.
pub(crate) const BUILTIN_ROSTER: &str = include_str!("../../data/roster.ron");

/// Loader for roster catalogs.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("invalid roster in {}", path.display()))
    }

    /// Parse and validate roster RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let data: RosterData = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        Roster::new(data)
    }

    /// The roster shipped with the game.
    pub fn builtin() -> LoadResult<Roster> {
        Self::parse(BUILTIN_ROSTER).context("built-in roster")
    }
}
