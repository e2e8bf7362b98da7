//! Deterministic battle rules and campaign flow shared across clients.
//!
//! `game-core` defines the canonical rules (entities, combat math, the effect
//! resolver, the turn sequencer and the scene controller) and exposes pure,
//! synchronous APIs. All state mutation flows through
//! [`session::GameSession::step`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod session;
pub mod snapshot;
pub mod state;

pub use action::{ActionError, ActionReport, BattleCommand, CommandOption, build_options};
pub use combat::{apply_damage, compute_damage, element_multiplier};
pub use config::GameConfig;
pub use engine::{
    BattleAdvance, BattleLog, BattleOutcome, BattleSession, BattleStep, Phase, TurnQueue,
};
pub use env::{
    GameEnv, PcgRng, ProgressError, ProgressStore, RngOracle, RosterOracle, ScriptOracle,
    battle_seed, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use session::{
    Command, GameSession, SaveData, SavedMember, Scene, SceneTag, SessionEvent, StepOutcome,
};
pub use snapshot::{CharacterView, DialogueView, GameSnapshot};
pub use state::{Character, CharacterTemplate, Element, Party, Skill, alive_indices, any_alive};
