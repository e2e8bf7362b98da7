//! Character templates and live combat participants.
//!
//! `CharacterTemplate` holds the fixed definition of a character (stats,
//! element, skills) and can be deserialized directly from content files.
//! Spawning a template produces a fresh [`Character`] at full health with no
//! transient combat state.

use super::{Element, Skill};

/// Fixed definition of a character, as authored in content data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterTemplate {
    pub name: String,
    pub element: Element,
    pub attack: u32,
    pub defense: u32,
    pub max_health: u32,
    /// Cosmetic label only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: String,
    pub skills: Vec<Skill>,
}

impl CharacterTemplate {
    pub fn new(
        name: impl Into<String>,
        element: Element,
        attack: u32,
        defense: u32,
        max_health: u32,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            attack,
            defense,
            max_health,
            weapon: String::new(),
            skills: Vec::new(),
        }
    }

    pub fn with_weapon(mut self, weapon: impl Into<String>) -> Self {
        self.weapon = weapon.into();
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        self.skills.extend(skills);
        self
    }

    /// Spawns a party-side character.
    pub fn spawn(&self) -> Character {
        Character::from_template(self, false)
    }

    /// Spawns an enemy-side character.
    pub fn spawn_enemy(&self) -> Character {
        Character::from_template(self, true)
    }
}

/// Mutable combat participant.
///
/// Invariants:
/// - `0 <= health <= max_health`
/// - alive iff `health > 0`
/// - `cannot_cast_skill_turns` only counts down at the end of this
///   character's own turns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub element: Element,
    pub attack: u32,
    pub defense: u32,
    pub max_health: u32,
    pub weapon: String,
    pub skills: Vec<Skill>,
    pub is_enemy: bool,

    health: u32,
    /// Attack bonus waiting to be spent by the next reading action.
    pub next_attack_bonus: u32,
    /// Remaining own turns during which skills are sealed.
    pub cannot_cast_skill_turns: u32,
    /// Halves incoming damage until this character's next turn starts.
    pub is_guarding: bool,

    // A lockout applied during the current turn is not counted down by that
    // same turn's end.
    lockout_set_this_turn: bool,
}

impl Character {
    pub fn from_template(template: &CharacterTemplate, is_enemy: bool) -> Self {
        Self {
            name: template.name.clone(),
            element: template.element,
            attack: template.attack,
            defense: template.defense,
            max_health: template.max_health,
            weapon: template.weapon.clone(),
            skills: template.skills.clone(),
            is_enemy,
            health: template.max_health,
            next_attack_bonus: 0,
            cannot_cast_skill_turns: 0,
            is_guarding: false,
            lockout_set_this_turn: false,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// True while recoil keeps this character from using skills.
    pub fn skills_sealed(&self) -> bool {
        self.cannot_cast_skill_turns > 0
    }

    /// Opens one of this character's own turns.
    pub fn start_turn(&mut self) {
        self.is_guarding = false;
    }

    /// Closes one of this character's own turns.
    pub fn end_turn(&mut self) {
        if self.lockout_set_this_turn {
            self.lockout_set_this_turn = false;
            return;
        }
        self.cannot_cast_skill_turns = self.cannot_cast_skill_turns.saturating_sub(1);
    }

    /// Seals this character's skills for `turns` of their upcoming own turns.
    pub fn seal_skills(&mut self, turns: u32) {
        self.cannot_cast_skill_turns = turns;
        self.lockout_set_this_turn = true;
    }

    /// Removes health, flooring at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let before = self.health;
        self.health = crate::combat::apply_damage(self.health, damage);
        before - self.health
    }

    /// Sets health, clamped to `0..=max_health`.
    pub fn set_health_clamped(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }

    /// Full rest: max health and no transient combat state.
    pub fn restore(&mut self) {
        self.health = self.max_health;
        self.next_attack_bonus = 0;
        self.cannot_cast_skill_turns = 0;
        self.is_guarding = false;
        self.lockout_set_this_turn = false;
    }
}
