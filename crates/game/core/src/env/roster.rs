use crate::state::Character;

/// Fixed character definitions.
///
/// Every call returns freshly spawned characters: full health, no bonus,
/// no lockout, not guarding.
pub trait RosterOracle {
    /// Founding party members, in order.
    fn starting_party(&self) -> Vec<Character>;

    /// Recruits in the fixed order they are offered.
    fn recruits(&self) -> Vec<Character>;

    /// Enemy roster for `stage`. Stages at or beyond [`Self::final_stage`]
    /// select the final encounter.
    fn enemies_for_stage(&self, stage: u32) -> Vec<Character>;

    /// Index of the final-battle stage.
    fn final_stage(&self) -> u32;

    /// Recruit at `index` of the fixed order, if any.
    fn recruit(&self, index: usize) -> Option<Character> {
        self.recruits().into_iter().nth(index)
    }
}
