//! Adapter exposing a [`SaveRepository`] as the core's [`ProgressStore`].

use game_core::{ProgressError, ProgressStore, SaveData};

use super::{RepositoryError, SaveRepository};

/// Borrowed view of a repository, handed to the session for one step.
pub struct RepositoryStore<'a> {
    repository: &'a dyn SaveRepository,
}

impl<'a> RepositoryStore<'a> {
    pub fn new(repository: &'a dyn SaveRepository) -> Self {
        Self { repository }
    }
}

impl ProgressStore for RepositoryStore<'_> {
    fn load_progress(&self) -> Result<Option<SaveData>, ProgressError> {
        self.repository.load().map_err(|error| {
            tracing::warn!(%error, "failed to load progress; starting fresh");
            to_progress_error(error)
        })
    }

    fn save_progress(&mut self, data: &SaveData) -> Result<(), ProgressError> {
        self.repository.save(data).map_err(|error| {
            tracing::warn!(%error, stage = data.stage, "failed to save progress");
            to_progress_error(error)
        })
    }
}

fn to_progress_error(error: RepositoryError) -> ProgressError {
    if error.is_corruption() {
        ProgressError::Corrupt(error.to_string())
    } else {
        ProgressError::Unavailable(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySaveRepository;

    #[test]
    fn round_trips_through_the_core_trait() {
        let repository = InMemorySaveRepository::new();
        let mut store = RepositoryStore::new(&repository);
        assert_eq!(store.load_progress(), Ok(None));

        let data = SaveData {
            stage: 3,
            recruits_added: 2,
            party: Vec::new(),
        };
        store.save_progress(&data).unwrap();

        assert_eq!(store.load_progress(), Ok(Some(data)));
        assert!(repository.exists());
    }

    #[test]
    fn decoding_failures_map_to_corrupt() {
        let error = to_progress_error(RepositoryError::Json("eof".into()));
        assert!(matches!(error, ProgressError::Corrupt(_)));

        let error = to_progress_error(RepositoryError::LockPoisoned);
        assert!(matches!(error, ProgressError::Unavailable(_)));
    }
}
