//! Damage calculation and application.

use crate::config::GameConfig;
use crate::state::Character;

/// Elemental multiplier for an attack from `attacker` into `defender`.
///
/// Returns [`GameConfig::ELEMENT_ADVANTAGE`] when the attacker's element beats
/// the defender's element, `1.0` otherwise (including any pairing with
/// `Element::None`).
pub fn element_multiplier(attacker: &Character, defender: &Character) -> f64 {
    if attacker.element.has_advantage_over(defender.element) {
        GameConfig::ELEMENT_ADVANTAGE
    } else {
        1.0
    }
}

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// effective_attack = attack + next_attack_bonus
/// raw              = floor(base_power * effective_attack * element_multiplier)
/// reduced          = raw - defense * DEFENSE_FACTOR
/// if guarding:
///     reduced      = floor(reduced * GUARD_REDUCTION)
/// damage           = max(1, reduced)
/// ```
///
/// The attacker's pending bonus is only read here; clearing it is up to the
/// action that spent it.
pub fn compute_damage(attacker: &Character, defender: &Character, base_power: u32) -> u32 {
    let effective_attack = attacker.attack.saturating_add(attacker.next_attack_bonus);
    let raw = (f64::from(base_power)
        * f64::from(effective_attack)
        * element_multiplier(attacker, defender))
    .floor() as i64;

    let mut reduced = raw - i64::from(defender.defense) * i64::from(GameConfig::DEFENSE_FACTOR);

    if defender.is_guarding {
        reduced = (reduced as f64 * GameConfig::GUARD_REDUCTION).floor() as i64;
    }

    u32::try_from(reduced.max(1)).unwrap_or(u32::MAX)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
