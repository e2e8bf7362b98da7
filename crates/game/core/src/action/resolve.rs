//! Effect resolver.
//!
//! Applies one chosen action to an attacker/defender pair, mutating their
//! combat state and producing the log line plus the damage dealt.
//!
//! Bonus contract: `next_attack_bonus` is spent by exactly one reading action
//! (a normal attack or a damaging skill) and never survives into a second one.

use crate::config::GameConfig;
use crate::state::{Character, Skill};

/// Result of one resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    /// Battle log line describing the action.
    pub log: String,
    /// Damage dealt to the defender (0 for non-damaging actions).
    pub damage: u32,
}

/// Uses `skill` from `attacker` on `defender`.
///
/// - power > 0: deals damage and spends the attacker's pending bonus
/// - bonus > 0: sets the attacker's next bonus (overwrites, never stacks)
/// - recoil: seals the attacker's skills for their next two own turns
pub fn apply_skill(attacker: &mut Character, defender: &mut Character, skill: &Skill) -> ActionReport {
    let mut log = format!("{} uses {}!", attacker.name, skill.name);
    let mut damage = 0;

    if skill.is_damaging() {
        damage = crate::combat::compute_damage(attacker, defender, skill.power);
        defender.take_damage(damage);
        attacker.next_attack_bonus = 0;
        log.push_str(&format!(" {} takes {} damage!", defender.name, damage));
    }

    if skill.attack_bonus_next_turn > 0 {
        attacker.next_attack_bonus = skill.attack_bonus_next_turn;
        log.push_str(&format!(
            " Next attack +{}!",
            skill.attack_bonus_next_turn
        ));
    }

    if skill.locks_caster {
        attacker.seal_skills(GameConfig::RECOIL_LOCK_TURNS);
        log.push_str(" The recoil seals skills for the next turns!");
    }

    ActionReport { log, damage }
}

/// Normal attack with the fixed base power. Always spends the pending bonus.
pub fn apply_normal_attack(attacker: &mut Character, defender: &mut Character) -> ActionReport {
    let damage =
        crate::combat::compute_damage(attacker, defender, GameConfig::NORMAL_ATTACK_POWER);
    defender.take_damage(damage);
    attacker.next_attack_bonus = 0;

    ActionReport {
        log: format!(
            "{} attacks! {} takes {} damage!",
            attacker.name, defender.name, damage
        ),
        damage,
    }
}

/// Takes a defensive stance until the actor's next turn starts.
pub fn apply_guard(actor: &mut Character) -> ActionReport {
    actor.is_guarding = true;
    ActionReport {
        log: format!("{} is guarding!", actor.name),
        damage: 0,
    }
}

/// Runs `action` inside the actor's turn bracket.
///
/// `start_turn` drops any previous guard, `end_turn` counts down the skill
/// lockout. Party members and enemies go through the same bracket.
pub fn resolve_turn<R>(actor: &mut Character, action: impl FnOnce(&mut Character) -> R) -> R {
    actor.start_turn();
    let result = action(actor);
    actor.end_turn();
    result
}
