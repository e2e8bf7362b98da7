use super::{SaveData, SceneTag};
use crate::action::ActionError;
use crate::engine::BattleOutcome;

/// Observable effect of a step, consumed by the runtime for logging and by
/// renderers for cosmetic feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionEvent {
    SceneChanged {
        from: SceneTag,
        to: SceneTag,
    },
    BattleStarted {
        stage: u32,
        final_battle: bool,
        enemies: Vec<String>,
    },
    /// A character resolved an attack, skill or guard.
    ActionResolved {
        actor: String,
        target: Option<String>,
        damage: u32,
        /// True when the actor is an enemy.
        enemy_side: bool,
        log: String,
        /// Flavor line of the skill used, if any.
        quote: Option<String>,
    },
    Swapped {
        from: String,
        to: String,
    },
    CharacterDefeated {
        name: String,
    },
    CommandRejected(ActionError),
    BattleDecided(BattleOutcome),
    PartyRestored,
    StageAdvanced {
        stage: u32,
    },
    Recruited {
        name: String,
    },
    ProgressSaved(SaveData),
    ProgressLoaded {
        stage: u32,
        recruits_added: usize,
    },
    /// Loading or saving failed, or no save exists. The session carried on.
    ProgressUnavailable {
        reason: String,
    },
}

/// Everything observable that happened during one [`super::GameSession::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutcome {
    pub events: Vec<SessionEvent>,
}

impl StepOutcome {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionEvent> {
        self.events.iter()
    }

    /// Scene reached at the end of the step, if it changed.
    pub fn scene_change(&self) -> Option<SceneTag> {
        self.events.iter().rev().find_map(|event| match event {
            SessionEvent::SceneChanged { to, .. } => Some(*to),
            _ => None,
        })
    }
}
