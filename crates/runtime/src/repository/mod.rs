//! Repository layer for saved progress.
//!
//! Repositories handle data that CHANGES during play: the single progress
//! slot written by save-and-pause and on clearing the game. Static content
//! (roster, dialogue) is handled by oracles, not repositories.

mod error;
mod file;
mod memory;
mod store;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use store::RepositoryStore;
pub use traits::SaveRepository;
