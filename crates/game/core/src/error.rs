//! Shared error classification.
//!
//! Each fallible area defines its own `thiserror` enum next to the code that
//! produces it ([`crate::action::ActionError`], [`crate::env::ProgressError`]).
//! None of them escape [`crate::session::GameSession::step`]; the session turns
//! them into a log line or a [`crate::session::SessionEvent`], and the
//! severity decides how loudly a host reports it.

/// How a rejected command or failed store access should be treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Expected during play: the player picked something unavailable, or no
    /// save exists yet. Picking another command is enough.
    Recoverable,

    /// Input that can never succeed as given, such as a skill index past the
    /// end of the list or an undecodable save.
    Validation,

    /// The battle reached a state the rules should have prevented.
    Internal,

    /// The session cannot continue from this state, such as a running
    /// battle with nobody left to act.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// True when the failure points at a rules bug rather than player input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error enum in this crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for log filtering and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
