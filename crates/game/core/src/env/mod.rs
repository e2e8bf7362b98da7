//! Traits describing the world outside the rules.
//!
//! Oracles expose the fixed roster, the scripted dialogue and randomness.
//! The [`GameEnv`] aggregate bundles them so the session can access
//! everything it needs without hard coupling to concrete implementations.
//! Persistence is reached through [`ProgressStore`], which is passed
//! separately because it is the only mutable collaborator.
mod progress;
mod rng;
mod roster;
mod script;

pub use progress::{ProgressError, ProgressStore};
pub use rng::{PcgRng, RngOracle, battle_seed, compute_seed};
pub use roster::RosterOracle;
pub use script::ScriptOracle;

/// Aggregates read-only oracles required by the session controller.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    roster: &'a dyn RosterOracle,
    script: &'a dyn ScriptOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        roster: &'a dyn RosterOracle,
        script: &'a dyn ScriptOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            roster,
            script,
            rng,
        }
    }

    pub fn roster(&self) -> &'a dyn RosterOracle {
        self.roster
    }

    pub fn script(&self) -> &'a dyn ScriptOracle {
        self.script
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("final_stage", &self.roster.final_stage())
            .field("recruits", &self.roster.recruits().len())
            .finish()
    }
}
