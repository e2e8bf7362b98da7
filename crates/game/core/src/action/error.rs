//! Action execution errors.
//!
//! The `Display` text of every variant doubles as the battle log line shown
//! when the command is rejected.

use crate::error::{ErrorSeverity, GameError};

/// Errors that can occur while resolving a battle command.
///
/// Every way of confirming a disabled menu entry logs the same line; the
/// variant records why the entry was disabled.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The highlighted menu entry is disabled.
    #[error("That can't be done right now!")]
    CommandDisabled,

    /// A skill was picked while recoil still seals the actor's skills.
    #[error("That can't be done right now!")]
    SkillLocked { actor: String },

    /// Swap was picked with a single member standing.
    #[error("That can't be done right now!")]
    SwapUnavailable,

    /// No living enemy left to target.
    #[error("There is no one to target!")]
    NoTarget,

    /// No living party member to act while the battle is still running.
    #[error("No one is able to act!")]
    NoActor,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            CommandDisabled | SkillLocked { .. } | SwapUnavailable => ErrorSeverity::Recoverable,
            NoTarget => ErrorSeverity::Internal,
            NoActor => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            CommandDisabled => "ACTION_COMMAND_DISABLED",
            SkillLocked { .. } => "ACTION_SKILL_LOCKED",
            SwapUnavailable => "ACTION_SWAP_UNAVAILABLE",
            NoTarget => "ACTION_NO_TARGET",
            NoActor => "ACTION_NO_ACTOR",
        }
    }
}
