//! Read-only views handed to display collaborators.
//!
//! A snapshot is derived purely from session state; taking one never changes
//! anything, so renderers may call it as often as they like.

use crate::action::CommandOption;
use crate::config::GameConfig;
use crate::engine::{BattleOutcome, Phase};
use crate::session::{GameSession, Scene, SceneTag, TITLE_MENU};
use crate::state::{Character, Element};

/// Display view of a single character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterView {
    pub name: String,
    pub element: Element,
    pub weapon: String,
    pub health: u32,
    pub max_health: u32,
    pub guarding: bool,
    pub attack_bonus: u32,
    pub lockout_turns: u32,
    pub alive: bool,
}

impl From<&Character> for CharacterView {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            element: character.element,
            weapon: character.weapon.clone(),
            health: character.health(),
            max_health: character.max_health,
            guarding: character.is_guarding,
            attack_bonus: character.next_attack_bonus,
            lockout_turns: character.cannot_cast_skill_turns,
            alive: character.is_alive(),
        }
    }
}

/// Dialogue currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueView {
    /// Visible lines of the current page.
    pub lines: Vec<String>,
    /// Whether another confirm shows more dialogue in the same scene.
    pub has_more: bool,
}

impl DialogueView {
    fn page(lines: &[String], start: usize, len: usize) -> Self {
        let end = (start + len).min(lines.len());
        Self {
            lines: lines.get(start..end).map(<[String]>::to_vec).unwrap_or_default(),
            has_more: end < lines.len(),
        }
    }

    fn whole(lines: &[String]) -> Self {
        Self {
            lines: lines.to_vec(),
            has_more: false,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub scene: SceneTag,
    pub stage: u32,
    pub recruits_added: usize,
    pub title_menu: Vec<String>,
    pub menu_index: usize,
    pub dialogue: Option<DialogueView>,
    pub party: Vec<CharacterView>,
    pub enemies: Vec<CharacterView>,
    /// Member offered on the recruit screen.
    pub recruit: Option<CharacterView>,
    pub phase: Option<Phase>,
    pub current_actor: Option<usize>,
    pub options: Vec<CommandOption>,
    pub selection: usize,
    /// Trailing window of the battle log.
    pub log: Vec<String>,
    pub pending: Option<BattleOutcome>,
    pub final_battle: bool,
}

impl GameSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let party = session.party();
        let mut snapshot = Self {
            scene: session.scene().tag(),
            stage: session.stage(),
            recruits_added: session.recruits_added(),
            title_menu: Vec::new(),
            menu_index: 0,
            dialogue: None,
            party: party.iter().map(CharacterView::from).collect(),
            enemies: Vec::new(),
            recruit: None,
            phase: None,
            current_actor: None,
            options: Vec::new(),
            selection: 0,
            log: Vec::new(),
            pending: None,
            final_battle: false,
        };

        match session.scene() {
            Scene::Title { menu_index } => {
                snapshot.title_menu = TITLE_MENU.iter().map(|entry| entry.to_string()).collect();
                snapshot.menu_index = *menu_index;
            }
            Scene::Story { lines, line } => {
                snapshot.dialogue = Some(DialogueView::page(lines, *line, 1));
            }
            Scene::Encounter {
                enemies,
                lines,
                line,
            } => {
                snapshot.enemies = enemies.iter().map(CharacterView::from).collect();
                snapshot.final_battle = enemies.len() > 1;
                snapshot.dialogue = Some(DialogueView::page(
                    lines,
                    *line,
                    GameConfig::ENCOUNTER_LINES_PER_PAGE,
                ));
            }
            Scene::Battle(battle) => {
                snapshot.enemies = battle.enemies().iter().map(CharacterView::from).collect();
                snapshot.phase = Some(battle.phase());
                snapshot.current_actor = battle.acting_member(party);
                snapshot.options = battle.options(party);
                snapshot.selection = battle.selection();
                snapshot.log = battle.log().tail(session.config().log_window).to_vec();
                snapshot.pending = battle.pending();
                snapshot.final_battle = battle.is_final_battle();
            }
            Scene::Recruit { member, lines } => {
                snapshot.recruit = Some(CharacterView::from(member));
                snapshot.dialogue = Some(DialogueView::whole(lines));
            }
            Scene::Clear { lines } | Scene::GameOver { lines } => {
                snapshot.dialogue = Some(DialogueView::whole(lines));
            }
        }

        snapshot
    }

    /// Highlighted battle command, if any.
    pub fn selected_option(&self) -> Option<&CommandOption> {
        self.options.get(self.selection)
    }
}
