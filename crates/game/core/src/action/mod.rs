//! Action domain - battle commands and their effects.
//!
//! # Module Structure
//!
//! - `error`: Rejection reasons for battle commands
//! - `menu`: Command list offered to the acting party member
//! - `resolve`: Effect resolver (normal attack, skills, guard) and the
//!   per-turn bracket shared by party members and enemies

pub mod error;
pub mod menu;
pub mod resolve;

pub use error::ActionError;
pub use menu::{BattleCommand, CommandOption, build_options};
pub use resolve::{ActionReport, apply_guard, apply_normal_attack, apply_skill, resolve_turn};
