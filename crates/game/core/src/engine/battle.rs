use std::collections::BTreeSet;

use super::{BattleLog, Phase, TurnQueue};
use crate::action::{
    ActionError, ActionReport, BattleCommand, CommandOption, apply_guard, apply_normal_attack,
    apply_skill, build_options, resolve_turn,
};
use crate::env::{RngOracle, battle_seed, compute_seed};
use crate::state::{Character, Party, alive_indices, any_alive};

/// Result of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// What a single [`BattleSession::advance`] call did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStep {
    /// The pending result was acknowledged; the battle is over.
    Concluded(BattleOutcome),
    /// One side is wiped out; the result waits for acknowledgment.
    Decided(BattleOutcome),
    /// A party member resolved an attack, skill or guard.
    PartyActed {
        actor: usize,
        target: Option<usize>,
        command: BattleCommand,
        report: ActionReport,
    },
    /// An enemy used one of its skills against a party member. Enemies have
    /// no plain attack; `skill` is `None` only for an enemy without skills,
    /// which spends its turn idle.
    EnemyActed {
        enemy: usize,
        target: usize,
        skill: Option<usize>,
        report: ActionReport,
    },
    /// The current turn was handed to another party member.
    Swapped { from: usize, to: usize },
    /// The actor asked to persist progress; the turn is not consumed.
    SaveRequested,
    /// The enemy queue ran dry and control returned to the party.
    PhaseChanged(Phase),
    /// The highlighted command could not run; nothing changed.
    Rejected(ActionError),
}

/// Step result plus characters whose defeat was announced during the step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleAdvance {
    pub step: BattleStep,
    pub defeated: Vec<String>,
}

/// Transient state of one encounter.
///
/// Owns the enemy roster; the party is borrowed per call because it outlives
/// the battle. Every mutation goes through [`BattleSession::advance`] or the
/// selection helpers.
#[derive(Clone, Debug)]
pub struct BattleSession {
    enemies: Vec<Character>,
    final_battle: bool,
    phase: Phase,
    player_queue: TurnQueue,
    enemy_queue: TurnQueue,
    current_actor: usize,
    selection: usize,
    log: BattleLog,
    pending: Option<BattleOutcome>,
    announced: BTreeSet<String>,
    /// Ordinal of this battle within the session; salts every roll.
    nonce: u64,
    rolls: u64,
}

impl BattleSession {
    /// Opens a battle against `enemies` and enters the player phase.
    ///
    /// `nonce` must differ between battles of one session so their enemy
    /// rolls are independent.
    pub fn begin(enemies: Vec<Character>, party: &Party, nonce: u64) -> Self {
        let mut log = BattleLog::new();
        log.push(format!("{} appeared!", join_names(&enemies)));

        let mut session = Self {
            final_battle: enemies.len() > 1,
            enemies,
            phase: Phase::Player,
            player_queue: TurnQueue::default(),
            enemy_queue: TurnQueue::default(),
            current_actor: 0,
            selection: 0,
            log,
            pending: None,
            announced: BTreeSet::new(),
            nonce,
            rolls: 0,
        };
        session.start_player_phase(party);
        session
    }

    /// Resolves one battle step.
    ///
    /// Order: pending acknowledgment, termination check, then the highlighted
    /// party command or a single enemy turn depending on the phase.
    pub fn advance(&mut self, party: &mut Party, rng: &dyn RngOracle, seed: u64) -> BattleAdvance {
        if let Some(outcome) = self.pending.take() {
            return BattleAdvance {
                step: BattleStep::Concluded(outcome),
                defeated: Vec::new(),
            };
        }

        if let Some(outcome) = self.check_termination(party) {
            return BattleAdvance {
                step: BattleStep::Decided(outcome),
                defeated: Vec::new(),
            };
        }

        let mut defeated = self.announce_defeats(party);

        let step = match self.phase {
            Phase::Player => self.player_step(party).unwrap_or_else(|error| {
                self.log.push(error.to_string());
                BattleStep::Rejected(error)
            }),
            Phase::Enemy => self.enemy_step(party, rng, seed),
        };

        defeated.extend(self.announce_defeats(party));
        BattleAdvance { step, defeated }
    }

    /// Moves the highlighted command up, wrapping.
    pub fn select_previous(&mut self, party: &Party) {
        if let Some(len) = self.selectable_len(party) {
            self.selection = (self.selection + len - 1) % len;
        }
    }

    /// Moves the highlighted command down, wrapping.
    pub fn select_next(&mut self, party: &Party) {
        if let Some(len) = self.selectable_len(party) {
            self.selection = (self.selection + 1) % len;
        }
    }

    /// Menu for the acting party member, empty outside the player phase.
    pub fn options(&self, party: &Party) -> Vec<CommandOption> {
        if self.phase != Phase::Player {
            return Vec::new();
        }
        self.acting_member(party)
            .map(|index| build_options(&party[index], alive_indices(party).len()))
            .unwrap_or_default()
    }

    /// First living enemy in roster order.
    pub fn primary_enemy(&self) -> Option<usize> {
        self.enemies.iter().position(Character::is_alive)
    }

    /// Party member whose command is awaited, if the party can act.
    pub fn acting_member(&self, party: &Party) -> Option<usize> {
        if party.get(self.current_actor).is_some_and(Character::is_alive) {
            return Some(self.current_actor);
        }
        alive_indices(party).first().copied()
    }

    pub fn enemies(&self) -> &[Character] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Character] {
        &mut self.enemies
    }

    pub fn is_final_battle(&self) -> bool {
        self.final_battle
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_actor(&self) -> usize {
        self.current_actor
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn player_queue(&self) -> &TurnQueue {
        &self.player_queue
    }

    pub fn enemy_queue(&self) -> &TurnQueue {
        &self.enemy_queue
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn pending(&self) -> Option<BattleOutcome> {
        self.pending
    }

    /// True while a party command is awaited.
    pub fn awaiting_command(&self) -> bool {
        self.phase == Phase::Player && self.pending.is_none()
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut BattleLog {
        &mut self.log
    }

    fn selectable_len(&self, party: &Party) -> Option<usize> {
        if !self.awaiting_command() {
            return None;
        }
        let len = self.options(party).len();
        (len > 0).then_some(len)
    }

    fn check_termination(&mut self, party: &Party) -> Option<BattleOutcome> {
        let outcome = if !any_alive(party) {
            self.log.push("The party was wiped out...");
            BattleOutcome::Defeat
        } else if !any_alive(&self.enemies) {
            self.log.push(format!("Defeated {}!", join_names(&self.enemies)));
            BattleOutcome::Victory
        } else {
            return None;
        };

        self.pending = Some(outcome);
        Some(outcome)
    }

    fn announce_defeats(&mut self, party: &Party) -> Vec<String> {
        let mut defeated = Vec::new();
        for character in party.iter().chain(self.enemies.iter()) {
            if character.is_alive() || self.announced.contains(&character.name) {
                continue;
            }
            self.announced.insert(character.name.clone());
            self.log.push(format!("{} was defeated!", character.name));
            defeated.push(character.name.clone());
        }
        defeated
    }

    fn player_step(&mut self, party: &mut Party) -> Result<BattleStep, ActionError> {
        let actor = self.acting_member(party).ok_or(ActionError::NoActor)?;
        self.current_actor = actor;

        let member = &party[actor];
        let options = build_options(member, alive_indices(party).len());
        let option = options.get(self.selection).ok_or(ActionError::CommandDisabled)?;
        if !option.enabled {
            return Err(match option.command {
                BattleCommand::Skill(_) if member.skills_sealed() => ActionError::SkillLocked {
                    actor: member.name.clone(),
                },
                BattleCommand::Swap => ActionError::SwapUnavailable,
                _ => ActionError::CommandDisabled,
            });
        }

        let command = option.command;
        match command {
            BattleCommand::SaveAndQuit => return Ok(BattleStep::SaveRequested),
            BattleCommand::Swap => return self.swap(party),
            BattleCommand::Attack | BattleCommand::Skill(_) | BattleCommand::Guard => {}
        }

        let target = self.primary_enemy().ok_or(ActionError::NoTarget)?;
        let member = &mut party[actor];
        let enemy = &mut self.enemies[target];

        let (report, target) = match command {
            BattleCommand::Attack => (
                resolve_turn(member, |member| apply_normal_attack(member, enemy)),
                Some(target),
            ),
            BattleCommand::Skill(index) => {
                let skill = member
                    .skills
                    .get(index)
                    .cloned()
                    .ok_or(ActionError::CommandDisabled)?;
                (
                    resolve_turn(member, |member| apply_skill(member, enemy, &skill)),
                    Some(target),
                )
            }
            _ => (resolve_turn(member, apply_guard), None),
        };

        self.log.push(report.log.clone());
        self.advance_player_queue(party);

        Ok(BattleStep::PartyActed {
            actor,
            target,
            command,
            report,
        })
    }

    fn swap(&mut self, party: &Party) -> Result<BattleStep, ActionError> {
        let alive = alive_indices(party);
        if alive.len() <= 1 {
            return Err(ActionError::SwapUnavailable);
        }

        let from = self.current_actor;
        let position = alive.iter().position(|&index| index == from).unwrap_or(0);
        let to = alive[(position + 1) % alive.len()];

        self.player_queue.replace_head(to);
        self.current_actor = to;
        self.log
            .push(format!("{} → {} swap!", party[from].name, party[to].name));

        let len = build_options(&party[to], alive.len()).len();
        self.selection = self.selection.min(len.saturating_sub(1));

        Ok(BattleStep::Swapped { from, to })
    }

    fn advance_player_queue(&mut self, party: &Party) {
        self.player_queue.drop_defeated(party);
        self.player_queue.pop();
        self.player_queue.drop_defeated(party);

        match self.player_queue.head() {
            Some(next) => {
                self.current_actor = next;
                self.selection = 0;
            }
            None => self.start_enemy_phase(),
        }
    }

    fn enemy_step(&mut self, party: &mut Party, rng: &dyn RngOracle, seed: u64) -> BattleStep {
        self.enemy_queue.drop_defeated(&self.enemies);
        let Some(enemy) = self.enemy_queue.pop() else {
            self.start_player_phase(party);
            return BattleStep::PhaseChanged(Phase::Player);
        };

        let targets = alive_indices(party);
        let roll = self.rolls;
        self.rolls += 1;

        let seed = battle_seed(seed, self.nonce);
        let actor_tag = u32::try_from(enemy).unwrap_or(u32::MAX);
        let target = targets[rng.pick_index(compute_seed(seed, roll, actor_tag, 1), targets.len())];

        let attacker = &mut self.enemies[enemy];
        let defender = &mut party[target];
        let index = rng.pick_index(compute_seed(seed, roll, actor_tag, 0), attacker.skills.len());
        let skill = attacker.skills.get(index).cloned();

        // Recoil never stops an enemy: it always casts, and the bracket still
        // counts its lockout down.
        let report = resolve_turn(attacker, |attacker| match &skill {
            Some(chosen) => apply_skill(attacker, defender, chosen),
            None => ActionReport {
                log: format!("{} is watching closely...", attacker.name),
                damage: 0,
            },
        });
        let skill = skill.map(|_| index);

        self.log.push(report.log.clone());

        if self.enemy_queue.is_empty() {
            self.start_player_phase(party);
        }

        BattleStep::EnemyActed {
            enemy,
            target,
            skill,
            report,
        }
    }

    fn start_player_phase(&mut self, party: &Party) {
        self.player_queue = TurnQueue::snapshot(alive_indices(party));
        self.phase = Phase::Player;
        self.selection = 0;
        if let Some(head) = self.player_queue.head() {
            self.current_actor = head;
        }
    }

    fn start_enemy_phase(&mut self) {
        self.enemy_queue = TurnQueue::snapshot(alive_indices(&self.enemies));
        self.phase = Phase::Enemy;
    }
}

fn join_names(characters: &[Character]) -> String {
    characters
        .iter()
        .map(|character| character.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{CharacterTemplate, Element, Skill};

    fn party() -> Party {
        Party::new(vec![
            CharacterTemplate::new("Seiya", Element::Fire, 10, 5, 150)
                .with_skill(Skill::strike("High Note", 10, ""))
                .with_skill(Skill::recoil("Retort", 15, ""))
                .spawn(),
            CharacterTemplate::new("Richard", Element::Thunder, 5, 10, 190)
                .with_skill(Skill::strike("Rap", 10, ""))
                .spawn(),
        ])
    }

    fn enemy(health: u32) -> Character {
        CharacterTemplate::new("Joichiro", Element::Water, 7, 0, health)
            .with_skill(Skill::strike("Splash", 10, ""))
            .spawn_enemy()
    }

    fn foe(name: &str, skills: Vec<Skill>) -> Character {
        CharacterTemplate::new(name, Element::Water, 1, 0, 10_000)
            .with_skills(skills)
            .spawn_enemy()
    }

    /// Advances until the enemy has acted `count` times, recording its picks.
    fn enemy_picks(
        battle: &mut BattleSession,
        party: &mut Party,
        seed: u64,
        count: usize,
    ) -> Vec<(usize, Option<usize>, String)> {
        let mut picks = Vec::new();
        while picks.len() < count {
            if let BattleStep::EnemyActed {
                target,
                skill,
                report,
                ..
            } = battle.advance(party, &PcgRng, seed).step
            {
                picks.push((target, skill, report.log));
            }
        }
        picks
    }

    fn select(battle: &mut BattleSession, party: &Party, command: BattleCommand) {
        let options = battle.options(party);
        let target = options
            .iter()
            .position(|option| option.command == command)
            .unwrap();
        while battle.selection() != target {
            battle.select_next(party);
        }
    }

    #[test]
    fn begin_enters_player_phase_with_full_queue() {
        let party = party();
        let battle = BattleSession::begin(vec![enemy(100)], &party, 0);

        assert_eq!(battle.phase(), Phase::Player);
        assert_eq!(battle.player_queue().iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(battle.current_actor(), 0);
        assert_eq!(battle.log().last(), Some("Joichiro appeared!"));
        assert!(!battle.is_final_battle());
    }

    #[test]
    fn acting_members_hand_over_to_enemy_phase() {
        let mut party = party();
        let mut battle = BattleSession::begin(vec![enemy(10_000)], &party, 0);

        battle.advance(&mut party, &PcgRng, 7);
        assert_eq!(battle.current_actor(), 1);
        battle.advance(&mut party, &PcgRng, 7);

        assert_eq!(battle.phase(), Phase::Enemy);
        assert_eq!(battle.enemy_queue().iter().collect::<Vec<_>>(), vec![0]);

        let step = battle.advance(&mut party, &PcgRng, 7).step;
        assert!(matches!(step, BattleStep::EnemyActed { skill: Some(0), .. }));
        assert_eq!(battle.phase(), Phase::Player);
        assert_eq!(battle.current_actor(), 0);
    }

    #[test]
    fn sealed_skill_is_rejected_without_consuming_the_turn() {
        let mut party = party();
        party[0].seal_skills(2);
        let mut battle = BattleSession::begin(vec![enemy(10_000)], &party, 0);
        battle.select_next(&party);

        let advance = battle.advance(&mut party, &PcgRng, 1);

        assert_eq!(
            advance.step,
            BattleStep::Rejected(ActionError::SkillLocked {
                actor: "Seiya".into()
            })
        );
        assert_eq!(battle.log().last(), Some("That can't be done right now!"));
        assert_eq!(battle.current_actor(), 0);
        assert_eq!(battle.enemies()[0].health(), 10_000);
    }

    #[test]
    fn swap_cycles_to_next_alive_member() {
        let mut party = party();
        let mut battle = BattleSession::begin(vec![enemy(10_000)], &party, 0);
        select(&mut battle, &party, BattleCommand::Swap);

        let step = battle.advance(&mut party, &PcgRng, 1).step;

        assert_eq!(step, BattleStep::Swapped { from: 0, to: 1 });
        assert_eq!(battle.player_queue().iter().collect::<Vec<_>>(), vec![1, 1]);
        assert_eq!(battle.log().last(), Some("Seiya → Richard swap!"));
    }

    #[test]
    fn swap_is_disabled_for_a_lone_survivor() {
        let mut party = party();
        party[1].take_damage(1_000);
        let mut battle = BattleSession::begin(vec![enemy(10_000)], &party, 0);
        select(&mut battle, &party, BattleCommand::Swap);

        let step = battle.advance(&mut party, &PcgRng, 1).step;
        assert_eq!(step, BattleStep::Rejected(ActionError::SwapUnavailable));
        assert_eq!(battle.log().last(), Some("That can't be done right now!"));
    }

    #[test]
    fn save_request_does_not_advance() {
        let mut party = party();
        let mut battle = BattleSession::begin(vec![enemy(10_000)], &party, 0);
        select(&mut battle, &party, BattleCommand::SaveAndQuit);

        let step = battle.advance(&mut party, &PcgRng, 1).step;

        assert_eq!(step, BattleStep::SaveRequested);
        assert_eq!(battle.player_queue().len(), 2);
    }

    #[test]
    fn kill_is_announced_then_victory_then_conclusion() {
        let mut party = party();
        let mut battle = BattleSession::begin(vec![enemy(10)], &party, 0);

        let advance = battle.advance(&mut party, &PcgRng, 1);
        assert_eq!(advance.defeated, vec!["Joichiro".to_string()]);

        let decided = battle.advance(&mut party, &PcgRng, 1).step;
        assert_eq!(decided, BattleStep::Decided(BattleOutcome::Victory));
        assert_eq!(battle.log().last(), Some("Defeated Joichiro!"));
        assert_eq!(battle.pending(), Some(BattleOutcome::Victory));

        let concluded = battle.advance(&mut party, &PcgRng, 1).step;
        assert_eq!(concluded, BattleStep::Concluded(BattleOutcome::Victory));
        assert_eq!(battle.pending(), None);
    }

    #[test]
    fn selection_is_frozen_while_a_result_is_pending() {
        let mut party = party();
        let mut battle = BattleSession::begin(vec![enemy(10)], &party, 0);
        battle.advance(&mut party, &PcgRng, 1);
        battle.advance(&mut party, &PcgRng, 1);

        battle.select_next(&party);

        assert_eq!(battle.selection(), 0);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let party = party();
        let mut battle = BattleSession::begin(vec![enemy(100)], &party, 0);
        let len = battle.options(&party).len();

        battle.select_previous(&party);
        assert_eq!(battle.selection(), len - 1);
        battle.select_next(&party);
        assert_eq!(battle.selection(), 0);
    }

    #[test]
    fn duo_encounter_is_the_final_battle() {
        let party = party();
        let battle = BattleSession::begin(vec![enemy(10), enemy(10)], &party, 0);
        assert!(battle.is_final_battle());
        assert_eq!(battle.log().last(), Some("Joichiro and Joichiro appeared!"));
    }

    #[test]
    fn consecutive_battles_roll_independently() {
        let trio = || {
            let mut party = party();
            party.recruit(
                CharacterTemplate::new("Masakado", Element::Water, 5, 5, 150).spawn(),
            );
            party
        };
        let skills = || {
            vec![
                Skill::charge("Goof Off", 1, ""),
                Skill::charge("Baseball Talk", 1, ""),
                Skill::charge("Tease", 1, ""),
            ]
        };
        let picks = |nonce| {
            let mut party = trio();
            let joichiro = foe("Joichiro", skills());
            let mut battle = BattleSession::begin(vec![joichiro], &party, nonce);
            enemy_picks(&mut battle, &mut party, 42, 12)
                .into_iter()
                .map(|(target, skill, _)| (target, skill))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(0), picks(0));
        assert_ne!(picks(0), picks(1));
    }

    #[test]
    fn enemies_always_cast_even_while_recoiling() {
        let mut party = party();
        let ookura = foe("Ookura", vec![Skill::recoil("Backlash", 1, "")]);
        let mut battle = BattleSession::begin(vec![ookura], &party, 0);

        for (_, skill, log) in enemy_picks(&mut battle, &mut party, 9, 3) {
            assert_eq!(skill, Some(0));
            assert!(log.starts_with("Ookura uses Backlash!"), "{log}");
        }
        assert!(battle.enemies()[0].skills_sealed());
    }

    #[test]
    fn enemy_bracket_only_runs_on_its_own_turn() {
        let mut party = party();
        let jiko = foe("Jiko", vec![Skill::strike("Jab", 1, "")]);
        let mut battle = BattleSession::begin(vec![jiko], &party, 0);
        battle.enemies_mut()[0].cannot_cast_skill_turns = 2;
        battle.enemies_mut()[0].is_guarding = true;

        // The guard halves both party hits (50 and 37) until Jiko acts.
        battle.advance(&mut party, &PcgRng, 3);
        battle.advance(&mut party, &PcgRng, 3);
        let jiko = &battle.enemies()[0];
        assert_eq!(jiko.health(), 10_000 - 25 - 18);
        assert!(jiko.is_guarding);
        assert_eq!(jiko.cannot_cast_skill_turns, 2);
        assert_eq!(battle.phase(), Phase::Enemy);

        let step = battle.advance(&mut party, &PcgRng, 3).step;
        assert!(matches!(step, BattleStep::EnemyActed { skill: Some(0), .. }));
        assert!(!battle.enemies()[0].is_guarding);
        assert_eq!(battle.enemies()[0].cannot_cast_skill_turns, 1);

        battle.advance(&mut party, &PcgRng, 3);
        battle.advance(&mut party, &PcgRng, 3);
        assert_eq!(battle.enemies()[0].cannot_cast_skill_turns, 1);

        battle.advance(&mut party, &PcgRng, 3);
        assert_eq!(battle.enemies()[0].cannot_cast_skill_turns, 0);
    }

    #[test]
    fn enemy_without_skills_idles() {
        let mut party = party();
        let mut battle = BattleSession::begin(vec![foe("Yokoyama", Vec::new())], &party, 0);

        let (_, skill, log) = enemy_picks(&mut battle, &mut party, 1, 1).remove(0);

        assert_eq!(skill, None);
        assert_eq!(log, "Yokoyama is watching closely...");
        assert_eq!(party[0].health(), 150);
        assert_eq!(party[1].health(), 190);
    }
}
