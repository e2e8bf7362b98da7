use crate::state::Character;

/// Scripted dialogue shown between battles.
pub trait ScriptOracle {
    /// Opening story, one line per confirm.
    fn story_lines(&self) -> Vec<String>;

    /// Pre-battle dialogue for the given enemy roster.
    /// An empty list skips straight to the battle.
    fn encounter_lines(&self, enemies: &[Character]) -> Vec<String>;

    /// Lines spoken when `name` joins the party.
    fn recruit_lines(&self, name: &str) -> Vec<String>;

    /// Ending shown after the final battle.
    fn clear_lines(&self) -> Vec<String>;

    /// Text shown on the game-over screen.
    fn game_over_lines(&self) -> Vec<String>;
}
