//! High-level runtime orchestrator.
//!
//! The runtime owns the session, the content oracles and the save
//! repository, and exposes a builder-based API for clients to drive the game
//! one command at a time.

use std::path::PathBuf;

use game_core::{
    Command, GameConfig, GameError, GameSession, GameSnapshot, SessionEvent, StepOutcome,
};

use crate::api::{Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryStore, SaveRepository,
};

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for enemy decisions; drawn at random when absent.
    pub seed: Option<u64>,
    /// Save file location; progress stays in memory when absent.
    pub save_path: Option<PathBuf>,
}

/// Main runtime that drives a single playthrough.
///
/// Every [`Runtime::dispatch`] call completes synchronously: the command is
/// applied, the resulting events are traced and returned.
pub struct Runtime {
    config: RuntimeConfig,
    session: GameSession,
    oracles: OracleManager,
    saves: Box<dyn SaveRepository>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Apply one command to the session.
    pub fn dispatch(&mut self, command: Command) -> StepOutcome {
        let env = self.oracles.as_game_env();
        let mut store = RepositoryStore::new(self.saves.as_ref());

        let outcome = self.session.step(&env, &mut store, command);
        for event in outcome.iter() {
            trace_event(event);
        }

        outcome
    }

    /// Read-only view of the current frame.
    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn seed(&self) -> u64 {
        self.session.seed()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn saves(&self) -> &dyn SaveRepository {
        self.saves.as_ref()
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("config", &self.config)
            .field("scene", &self.session.scene().tag())
            .field("stage", &self.session.stage())
            .finish()
    }
}

fn trace_event(event: &SessionEvent) {
    match event {
        SessionEvent::SceneChanged { from, to } => {
            tracing::info!(%from, %to, "scene changed");
        }
        SessionEvent::BattleStarted {
            stage,
            final_battle,
            enemies,
        } => {
            tracing::info!(stage, final_battle, enemies = ?enemies, "battle started");
        }
        SessionEvent::ActionResolved {
            actor,
            target,
            damage,
            enemy_side,
            log,
            ..
        } => {
            tracing::debug!(%actor, target = ?target, damage, enemy_side, "{log}");
        }
        SessionEvent::Swapped { from, to } => {
            tracing::debug!(%from, %to, "swapped");
        }
        SessionEvent::CharacterDefeated { name } => {
            tracing::info!(%name, "character defeated");
        }
        SessionEvent::CommandRejected(error) => {
            let severity = error.severity();
            if severity.is_internal() {
                tracing::warn!(%error, code = error.error_code(), "command rejected");
            } else {
                tracing::debug!(%error, severity = severity.as_str(), "command rejected");
            }
        }
        SessionEvent::BattleDecided(outcome) => {
            tracing::info!(outcome = ?outcome, "battle decided");
        }
        SessionEvent::PartyRestored => {
            tracing::debug!("party restored");
        }
        SessionEvent::StageAdvanced { stage } => {
            tracing::info!(stage, "stage advanced");
        }
        SessionEvent::Recruited { name } => {
            tracing::info!(%name, "recruit joined");
        }
        SessionEvent::ProgressSaved(data) => {
            tracing::info!(
                stage = data.stage,
                recruits_added = data.recruits_added,
                "progress saved"
            );
        }
        SessionEvent::ProgressLoaded {
            stage,
            recruits_added,
        } => {
            tracing::info!(stage, recruits_added, "progress loaded");
        }
        SessionEvent::ProgressUnavailable { reason } => {
            tracing::warn!(%reason, "progress unavailable");
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    saves: Option<Box<dyn SaveRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            saves: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Use a specific save repository instead of the one derived from
    /// [`RuntimeConfig::save_path`].
    pub fn save_repository(mut self, repository: impl SaveRepository + 'static) -> Self {
        self.saves = Some(Box::new(repository));
        self
    }

    /// Build the runtime.
    pub fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;

        let saves: Box<dyn SaveRepository> = match (self.saves, &self.config.save_path) {
            (Some(saves), _) => saves,
            (None, Some(path)) => Box::new(FileSaveRepository::new(path)?),
            (None, None) => Box::new(InMemorySaveRepository::new()),
        };

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let session = GameSession::new(self.config.game_config.clone(), seed);

        tracing::info!(
            seed,
            persistent = self.config.save_path.is_some(),
            "runtime ready"
        );

        Ok(Runtime {
            config: self.config,
            session,
            oracles,
            saves,
        })
    }
}
