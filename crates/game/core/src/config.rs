/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of trailing battle log entries exposed to the display.
    /// The log itself keeps its full history.
    pub log_window: usize,
}

impl GameConfig {
    // ===== combat rule constants =====
    /// Each point of defense removes this much damage before guarding.
    pub const DEFENSE_FACTOR: u32 = 5;
    /// Damage multiplier when the attacker's element beats the defender's.
    pub const ELEMENT_ADVANTAGE: f64 = 1.5;
    /// Multiplier applied to post-defense damage against a guarding target.
    pub const GUARD_REDUCTION: f64 = 0.5;
    /// Base power of the normal attack command.
    pub const NORMAL_ATTACK_POWER: u32 = 5;
    /// Attack bonus granted by the built-in charge skills.
    pub const CHARGE_BONUS: u32 = 15;
    /// Own turns during which a recoil skill seals the caster's skills.
    pub const RECOIL_LOCK_TURNS: u32 = 2;

    // ===== campaign constants =====
    /// Entries in the title menu (new game, continue).
    pub const TITLE_MENU_LEN: usize = 2;
    /// Encounter dialogue advances this many lines per confirm.
    pub const ENCOUNTER_LINES_PER_PAGE: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LOG_WINDOW: usize = 4;

    pub fn new() -> Self {
        Self {
            log_window: Self::DEFAULT_LOG_WINDOW,
        }
    }

    pub fn with_log_window(log_window: usize) -> Self {
        Self {
            log_window: log_window.max(1),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
