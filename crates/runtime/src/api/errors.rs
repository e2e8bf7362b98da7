//! Unified error types surfaced by the runtime API.
//!
//! Only construction can fail: once built, the runtime turns every command
//! into events and never returns an error from a step.
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
