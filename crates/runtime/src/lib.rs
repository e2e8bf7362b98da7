//! Runtime orchestration for a single playthrough.
//!
//! This crate wires together content oracles, the save repository and one
//! [`game_core::GameSession`] into a synchronous runtime API. Consumers embed
//! [`Runtime`] to dispatch commands and read snapshots.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod oracle;
pub mod repository;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use oracle::OracleManager;
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, RepositoryStore, SaveRepository,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
