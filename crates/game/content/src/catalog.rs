//! Validated content catalogs implementing the core oracles.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{bail, ensure};
use game_core::{Character, CharacterTemplate, RosterOracle, ScriptOracle};
use serde::{Deserialize, Serialize};

/// Roster as authored in `roster.ron`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterData {
    pub party: Vec<CharacterTemplate>,
    #[serde(default)]
    pub recruits: Vec<CharacterTemplate>,
    /// One enemy roster per stage; the last entry is the final battle.
    pub stages: Vec<Vec<CharacterTemplate>>,
}

impl RosterData {
    /// Checks the structural rules the session relies on.
    ///
    /// Party and recruit names must be unique because saved health is matched
    /// back by name, and every stage needs at least one enemy with at least
    /// one skill.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.party.is_empty(), "roster defines no starting party");
        ensure!(!self.stages.is_empty(), "roster defines no stages");

        for (stage, enemies) in self.stages.iter().enumerate() {
            ensure!(!enemies.is_empty(), "stage {stage} has no enemies");
            // Enemies have no plain attack; every turn casts one of these.
            for enemy in enemies {
                ensure!(
                    !enemy.skills.is_empty(),
                    "enemy '{}' in stage {stage} has no skills",
                    enemy.name
                );
            }
        }

        let mut names = BTreeSet::new();
        for member in self.party.iter().chain(&self.recruits) {
            if !names.insert(member.name.as_str()) {
                bail!("duplicate party member name '{}'", member.name);
            }
        }

        for template in self.party.iter().chain(&self.recruits).chain(self.stages.iter().flatten()) {
            ensure!(
                template.max_health > 0,
                "'{}' must start with positive health",
                template.name
            );
        }

        Ok(())
    }
}

/// Roster oracle backed by validated data.
#[derive(Clone, Debug)]
pub struct Roster {
    data: RosterData,
}

impl Roster {
    pub fn new(data: RosterData) -> anyhow::Result<Self> {
        data.validate()?;
        Ok(Self { data })
    }

    pub fn data(&self) -> &RosterData {
        &self.data
    }

    pub fn stage_count(&self) -> usize {
        self.data.stages.len()
    }
}

impl RosterOracle for Roster {
    fn starting_party(&self) -> Vec<Character> {
        self.data.party.iter().map(CharacterTemplate::spawn).collect()
    }

    fn recruits(&self) -> Vec<Character> {
        self.data.recruits.iter().map(CharacterTemplate::spawn).collect()
    }

    fn enemies_for_stage(&self, stage: u32) -> Vec<Character> {
        let last = self.data.stages.len().saturating_sub(1);
        let index = usize::try_from(stage).map_or(last, |stage| stage.min(last));
        self.data
            .stages
            .get(index)
            .map(|enemies| enemies.iter().map(CharacterTemplate::spawn_enemy).collect())
            .unwrap_or_default()
    }

    fn final_stage(&self) -> u32 {
        u32::try_from(self.data.stages.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    fn recruit(&self, index: usize) -> Option<Character> {
        self.data.recruits.get(index).map(CharacterTemplate::spawn)
    }
}

/// Dialogue as authored in `script.ron`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptData {
    #[serde(default)]
    pub story: Vec<String>,
    /// Pre-battle lines keyed by the enemy of a single-enemy stage.
    #[serde(default)]
    pub encounters: BTreeMap<String, Vec<String>>,
    /// Pre-battle lines whenever several enemies appear together.
    #[serde(default)]
    pub final_encounter: Vec<String>,
    #[serde(default)]
    pub fallback_encounter: Vec<String>,
    #[serde(default)]
    pub recruits: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub fallback_recruit: Vec<String>,
    #[serde(default)]
    pub clear: Vec<String>,
    #[serde(default)]
    pub game_over: Vec<String>,
}

/// Script oracle backed by authored dialogue.
#[derive(Clone, Debug, Default)]
pub struct Script {
    data: ScriptData,
}

impl Script {
    pub fn new(data: ScriptData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ScriptData {
        &self.data
    }
}

impl ScriptOracle for Script {
    fn story_lines(&self) -> Vec<String> {
        self.data.story.clone()
    }

    fn encounter_lines(&self, enemies: &[Character]) -> Vec<String> {
        match enemies {
            [single] => self
                .data
                .encounters
                .get(&single.name)
                .unwrap_or(&self.data.fallback_encounter)
                .clone(),
            [] => Vec::new(),
            _ => self.data.final_encounter.clone(),
        }
    }

    fn recruit_lines(&self, name: &str) -> Vec<String> {
        self.data
            .recruits
            .get(name)
            .unwrap_or(&self.data.fallback_recruit)
            .clone()
    }

    fn clear_lines(&self) -> Vec<String> {
        self.data.clear.clone()
    }

    fn game_over_lines(&self) -> Vec<String> {
        self.data.game_over.clone()
    }
}
