//! Runtime wrapper around static game content.
//!
//! The content catalogs implement the `game-core` oracle traits; the
//! [`OracleManager`] bundles them with the RNG so the runtime can build
//! [`GameEnv`] views on demand. The data is immutable at runtime; dynamic
//! state lives in the session and the save repository.

use std::sync::Arc;

use game_content::{GameContent, Roster, Script};
use game_core::{GameEnv, PcgRng};

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) roster: Arc<Roster>,
    pub(crate) script: Arc<Script>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(roster: Arc<Roster>, script: Arc<Script>) -> Self {
        Self {
            roster,
            script,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Builds the manager from loaded content.
    pub fn from_content(content: &GameContent) -> Self {
        Self::new(
            Arc::new(content.roster.clone()),
            Arc::new(content.script.clone()),
        )
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        GameEnv::new(self.roster.as_ref(), self.script.as_ref(), &self.rng)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn script(&self) -> &Script {
        &self.script
    }
}
