use strum::{Display, IntoStaticStr};

use crate::engine::BattleSession;
use crate::state::Character;

/// Title menu entries, in display order.
pub const TITLE_MENU: [&str; crate::config::GameConfig::TITLE_MENU_LEN] = ["New Game", "Continue"];

/// Index of "Continue" in [`TITLE_MENU`].
pub(crate) const CONTINUE_INDEX: usize = 1;

/// Current screen of the campaign state machine.
#[derive(Clone, Debug)]
pub enum Scene {
    Title {
        menu_index: usize,
    },
    Story {
        lines: Vec<String>,
        line: usize,
    },
    /// Pre-battle dialogue; `line` is the first line of the visible page.
    Encounter {
        enemies: Vec<Character>,
        lines: Vec<String>,
        line: usize,
    },
    Battle(Box<BattleSession>),
    Recruit {
        member: Character,
        lines: Vec<String>,
    },
    Clear {
        lines: Vec<String>,
    },
    GameOver {
        lines: Vec<String>,
    },
}

impl Scene {
    pub fn title() -> Self {
        Self::Title { menu_index: 0 }
    }

    pub fn tag(&self) -> SceneTag {
        match self {
            Self::Title { .. } => SceneTag::Title,
            Self::Story { .. } => SceneTag::Story,
            Self::Encounter { .. } => SceneTag::Encounter,
            Self::Battle(_) => SceneTag::Battle,
            Self::Recruit { .. } => SceneTag::Recruit,
            Self::Clear { .. } => SceneTag::Clear,
            Self::GameOver { .. } => SceneTag::GameOver,
        }
    }

    pub fn battle(&self) -> Option<&BattleSession> {
        match self {
            Self::Battle(battle) => Some(battle),
            _ => None,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::title()
    }
}

/// Data-free discriminant of [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneTag {
    Title,
    Story,
    Encounter,
    Battle,
    Recruit,
    Clear,
    GameOver,
}
