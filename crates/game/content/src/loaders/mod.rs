//! Content loaders for reading game data.
//!
//! Loaders turn RON/TOML text into validated catalogs. Each loader accepts
//! either a path or already-read text, so the embedded defaults and on-disk
//! replacements go through the same parsing and validation.

pub mod config;
pub mod factory;
pub mod roster;
pub mod script;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, GameContent};
pub use roster::RosterLoader;
pub use script::ScriptLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
