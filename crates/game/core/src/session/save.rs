//! Persisted campaign progress.
//!
//! Only progress is stored: the stage, how many recruits joined and each
//! member's health. Identity, stats and skills always come from the roster,
//! so a save can never introduce a character the content does not define.

use crate::env::RosterOracle;
use crate::state::Party;

/// Saved health of one party member, matched back by name on load.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SavedMember {
    pub name: String,
    pub current_health: u32,
    pub max_health: u32,
}

/// Progress record written by save-and-pause and on clearing the game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SaveData {
    pub stage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub recruits_added: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub party: Vec<SavedMember>,
}

impl SaveData {
    pub fn capture(stage: u32, party: &Party, recruits_added: usize) -> Self {
        Self {
            stage,
            recruits_added,
            party: party
                .iter()
                .map(|member| SavedMember {
                    name: member.name.clone(),
                    current_health: member.health(),
                    max_health: member.max_health,
                })
                .collect(),
        }
    }

    /// Rebuilds the party this record describes.
    ///
    /// Starts from the founding members, appends the first `recruits_added`
    /// recruits in their fixed order (clamped to what the roster offers), then
    /// overlays saved health by name, clamped to each member's maximum. Saved
    /// entries that match no member are ignored.
    ///
    /// Returns the party and the effective recruit count.
    pub fn restore(&self, roster: &dyn RosterOracle) -> (Party, usize) {
        let recruits = roster.recruits();
        let recruits_added = self.recruits_added.min(recruits.len());

        let mut party: Party = roster
            .starting_party()
            .into_iter()
            .chain(recruits.into_iter().take(recruits_added))
            .collect();

        for saved in &self.party {
            if let Some(member) = party.find_by_name_mut(&saved.name) {
                member.set_health_clamped(saved.current_health);
            }
        }

        (party, recruits_added)
    }
}
