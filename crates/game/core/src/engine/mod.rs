//! Turn sequencer for a single encounter.
//!
//! [`BattleSession`] is the authoritative reducer for battle state. Each call
//! to [`BattleSession::advance`] resolves exactly one step: acknowledging a
//! pending result, detecting termination, running the highlighted party
//! command, or letting one enemy act. Queues are index snapshots taken at
//! phase entry and trimmed lazily at the head.

mod battle;
mod log;
mod turns;

pub use battle::{BattleAdvance, BattleOutcome, BattleSession, BattleStep};
pub use log::BattleLog;
pub use turns::{Phase, TurnQueue};
