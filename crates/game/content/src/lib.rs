//! Data-driven content definitions and loaders.
//!
//! This crate houses the fixed game content and the loaders that read it:
//! - Party, recruit and enemy rosters (RON)
//! - Story, encounter, recruit and ending dialogue (RON)
//! - Tunable game configuration (TOML)
//!
//! The built-in data is embedded at compile time; [`ContentFactory::from_dir`]
//! reads replacement files from disk instead. Content is consumed through the
//! core's roster and script oracles and never appears in save data.

pub mod catalog;
pub mod loaders;

pub use catalog::{Roster, RosterData, Script, ScriptData};
pub use loaders::{ConfigLoader, ContentFactory, GameContent, RosterLoader, ScriptLoader};
