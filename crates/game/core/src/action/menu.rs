//! Battle command menu offered to the acting party member.

use crate::state::Character;

/// One entry of the battle menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleCommand {
    /// Normal attack against the primary enemy.
    Attack,
    /// Skill at this index of the actor's skill list.
    Skill(usize),
    /// Halve incoming damage until the actor's next turn.
    Guard,
    /// Hand the current turn to the next living member.
    Swap,
    /// Persist progress; does not consume the turn.
    SaveAndQuit,
}

impl BattleCommand {
    /// Whether executing this command consumes the actor's turn.
    pub const fn advances_turn(self) -> bool {
        matches!(self, Self::Attack | Self::Skill(_) | Self::Guard)
    }
}

/// Menu entry as displayed: label, command and availability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandOption {
    pub label: String,
    pub command: BattleCommand,
    pub enabled: bool,
}

/// Builds the ordered menu for `actor`.
///
/// Layout: attack, every skill in list order, guard, swap, save & quit.
/// Skills are disabled while recoil seals them; swap is disabled unless more
/// than one party member is standing.
pub fn build_options(actor: &Character, alive_party_members: usize) -> Vec<CommandOption> {
    let sealed = actor.skills_sealed();

    let mut options = Vec::with_capacity(actor.skills.len() + 4);
    options.push(CommandOption {
        label: "Attack".into(),
        command: BattleCommand::Attack,
        enabled: true,
    });

    options.extend(
        actor
            .skills
            .iter()
            .enumerate()
            .map(|(index, skill)| CommandOption {
                label: if sealed {
                    format!("{} (sealed: recoil)", skill.name)
                } else {
                    skill.name.clone()
                },
                command: BattleCommand::Skill(index),
                enabled: !sealed,
            }),
    );

    options.push(CommandOption {
        label: "Guard".into(),
        command: BattleCommand::Guard,
        enabled: true,
    });
    options.push(CommandOption {
        label: "Swap".into(),
        command: BattleCommand::Swap,
        enabled: alive_party_members > 1,
    });
    options.push(CommandOption {
        label: "Save & Quit".into(),
        command: BattleCommand::SaveAndQuit,
        enabled: true,
    });

    options
}
