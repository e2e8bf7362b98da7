//! Campaign state machine.
//!
//! [`GameSession`] owns the party, the campaign progress and the current
//! [`Scene`]. [`GameSession::step`] is the single transition function:
//! `Title → Story → Encounter → Battle → (Recruit →) Encounter … → Clear | GameOver → Title`.
//! Every call completes synchronously and reports what happened through
//! [`StepOutcome`]; no error ever crosses it.

mod command;
mod events;
mod save;
mod scene;

pub use command::Command;
pub use events::{SessionEvent, StepOutcome};
pub use save::{SaveData, SavedMember};
pub use scene::{Scene, SceneTag, TITLE_MENU};

use scene::CONTINUE_INDEX;

use crate::action::BattleCommand;
use crate::config::GameConfig;
use crate::engine::{BattleOutcome, BattleSession, BattleStep};
use crate::env::{GameEnv, ProgressStore, RosterOracle};
use crate::snapshot::GameSnapshot;
use crate::state::{Character, Party};

const SAVED_LINE: &str = "Progress saved. It is safe to quit now.";
const SAVE_FAILED_LINE: &str = "Saving failed!";

/// One playthrough: party, progress and the active scene.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    seed: u64,
    stage: u32,
    party: Party,
    recruits_added: usize,
    /// Battles started so far; survives new games so retries roll afresh.
    battles: u64,
    scene: Scene,
}

impl GameSession {
    /// Creates a session sitting on the title screen.
    ///
    /// `seed` drives every enemy decision, so two sessions with the same seed
    /// and the same commands play out identically.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            stage: 0,
            party: Party::default(),
            recruits_added: 0,
            battles: 0,
            scene: Scene::title(),
        }
    }

    /// Applies one command and returns the resulting events.
    pub fn step(
        &mut self,
        env: &GameEnv<'_>,
        store: &mut dyn ProgressStore,
        command: Command,
    ) -> StepOutcome {
        let from = self.scene.tag();
        let mut events = Vec::new();

        match command {
            Command::SelectPrevious => self.select(false),
            Command::SelectNext => self.select(true),
            Command::Confirm => {
                let scene = std::mem::take(&mut self.scene);
                self.scene = self.confirm(scene, env, store, &mut events);
            }
        }

        let to = self.scene.tag();
        if from != to {
            events.push(SessionEvent::SceneChanged { from, to });
        }

        StepOutcome { events }
    }

    /// Read-only view for display collaborators.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn party_mut(&mut self) -> &mut Party {
        &mut self.party
    }

    pub fn recruits_added(&self) -> usize {
        self.recruits_added
    }

    /// Number of battles started in this session.
    pub fn battles_started(&self) -> u64 {
        self.battles
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn battle(&self) -> Option<&BattleSession> {
        self.scene.battle()
    }

    pub fn battle_mut(&mut self) -> Option<&mut BattleSession> {
        match &mut self.scene {
            Scene::Battle(battle) => Some(battle),
            _ => None,
        }
    }

    fn select(&mut self, forward: bool) {
        match &mut self.scene {
            Scene::Title { menu_index } => {
                let len = GameConfig::TITLE_MENU_LEN;
                *menu_index = if forward {
                    (*menu_index + 1) % len
                } else {
                    (*menu_index + len - 1) % len
                };
            }
            Scene::Battle(battle) if forward => battle.select_next(&self.party),
            Scene::Battle(battle) => battle.select_previous(&self.party),
            _ => {}
        }
    }

    fn confirm(
        &mut self,
        scene: Scene,
        env: &GameEnv<'_>,
        store: &mut dyn ProgressStore,
        events: &mut Vec<SessionEvent>,
    ) -> Scene {
        match scene {
            Scene::Title { menu_index } => {
                self.reset(env.roster());
                if menu_index == CONTINUE_INDEX {
                    self.load(env.roster(), store, events);
                }
                self.open_story(env, events)
            }
            Scene::Story { lines, line } => {
                let line = line + 1;
                if line >= lines.len() {
                    self.start_encounter(env, events)
                } else {
                    Scene::Story { lines, line }
                }
            }
            Scene::Encounter {
                enemies,
                lines,
                line,
            } => {
                let line = line + GameConfig::ENCOUNTER_LINES_PER_PAGE;
                if line >= lines.len() {
                    self.start_battle(enemies, events)
                } else {
                    Scene::Encounter {
                        enemies,
                        lines,
                        line,
                    }
                }
            }
            Scene::Battle(battle) => self.confirm_battle(battle, env, store, events),
            Scene::Recruit { member, .. } => {
                events.push(SessionEvent::Recruited {
                    name: member.name.clone(),
                });
                self.party.recruit(member);
                self.recruits_added += 1;
                self.party.restore_all();
                events.push(SessionEvent::PartyRestored);
                self.start_encounter(env, events)
            }
            Scene::Clear { .. } => {
                let stage = env.roster().final_stage() + 1;
                self.save(stage, store, events);
                Scene::title()
            }
            Scene::GameOver { .. } => Scene::title(),
        }
    }

    fn confirm_battle(
        &mut self,
        mut battle: Box<BattleSession>,
        env: &GameEnv<'_>,
        store: &mut dyn ProgressStore,
        events: &mut Vec<SessionEvent>,
    ) -> Scene {
        let advance = battle.advance(&mut self.party, env.rng(), self.seed);

        match advance.step {
            BattleStep::Concluded(BattleOutcome::Victory) => {
                return self.on_victory(battle.is_final_battle(), env, events);
            }
            BattleStep::Concluded(BattleOutcome::Defeat) => {
                return Scene::GameOver {
                    lines: env.script().game_over_lines(),
                };
            }
            BattleStep::Decided(outcome) => events.push(SessionEvent::BattleDecided(outcome)),
            BattleStep::PartyActed {
                actor,
                target,
                command,
                report,
            } => {
                let member = &self.party[actor];
                let quote = match command {
                    BattleCommand::Skill(index) => member.skills.get(index).map(|s| &s.quote),
                    _ => None,
                };
                events.push(SessionEvent::ActionResolved {
                    actor: member.name.clone(),
                    target: target.map(|index| battle.enemies()[index].name.clone()),
                    damage: report.damage,
                    enemy_side: false,
                    log: report.log,
                    quote: non_empty(quote),
                });
            }
            BattleStep::EnemyActed {
                enemy,
                target,
                skill,
                report,
            } => {
                let attacker = &battle.enemies()[enemy];
                let quote = skill.and_then(|index| attacker.skills.get(index)).map(|s| &s.quote);
                events.push(SessionEvent::ActionResolved {
                    actor: attacker.name.clone(),
                    target: Some(self.party[target].name.clone()),
                    damage: report.damage,
                    enemy_side: true,
                    log: report.log,
                    quote: non_empty(quote),
                });
            }
            BattleStep::Swapped { from, to } => events.push(SessionEvent::Swapped {
                from: self.party[from].name.clone(),
                to: self.party[to].name.clone(),
            }),
            BattleStep::SaveRequested => {
                let line = if self.save(self.stage, store, events) {
                    SAVED_LINE
                } else {
                    SAVE_FAILED_LINE
                };
                battle.log_mut().push(line);
            }
            BattleStep::PhaseChanged(_) => {}
            BattleStep::Rejected(error) => events.push(SessionEvent::CommandRejected(error)),
        }

        events.extend(
            advance
                .defeated
                .into_iter()
                .map(|name| SessionEvent::CharacterDefeated { name }),
        );

        Scene::Battle(battle)
    }

    fn on_victory(
        &mut self,
        final_battle: bool,
        env: &GameEnv<'_>,
        events: &mut Vec<SessionEvent>,
    ) -> Scene {
        self.party.restore_all();
        events.push(SessionEvent::PartyRestored);

        if final_battle {
            return Scene::Clear {
                lines: env.script().clear_lines(),
            };
        }

        self.stage += 1;
        events.push(SessionEvent::StageAdvanced { stage: self.stage });

        let roster = env.roster();
        if self.stage < roster.final_stage() {
            if let Some(member) = roster.recruit(self.recruits_added) {
                return Scene::Recruit {
                    lines: env.script().recruit_lines(&member.name),
                    member,
                };
            }
        }

        self.start_encounter(env, events)
    }

    fn open_story(&mut self, env: &GameEnv<'_>, events: &mut Vec<SessionEvent>) -> Scene {
        let lines = env.script().story_lines();
        if lines.is_empty() {
            return self.start_encounter(env, events);
        }
        Scene::Story { lines, line: 0 }
    }

    fn start_encounter(&mut self, env: &GameEnv<'_>, events: &mut Vec<SessionEvent>) -> Scene {
        let enemies = env.roster().enemies_for_stage(self.stage);
        let lines = env.script().encounter_lines(&enemies);
        if lines.is_empty() {
            return self.start_battle(enemies, events);
        }
        Scene::Encounter {
            enemies,
            lines,
            line: 0,
        }
    }

    fn start_battle(&mut self, enemies: Vec<Character>, events: &mut Vec<SessionEvent>) -> Scene {
        let battle = BattleSession::begin(enemies, &self.party, self.battles);
        self.battles += 1;
        events.push(SessionEvent::BattleStarted {
            stage: self.stage,
            final_battle: battle.is_final_battle(),
            enemies: battle.enemies().iter().map(|e| e.name.clone()).collect(),
        });
        Scene::Battle(Box::new(battle))
    }

    fn reset(&mut self, roster: &dyn RosterOracle) {
        self.stage = 0;
        self.recruits_added = 0;
        self.party = Party::new(roster.starting_party());
    }

    /// Loads saved progress. Missing or unreadable saves leave the fresh
    /// start from [`Self::reset`] in place.
    fn load(
        &mut self,
        roster: &dyn RosterOracle,
        store: &dyn ProgressStore,
        events: &mut Vec<SessionEvent>,
    ) {
        match store.load_progress() {
            Ok(Some(data)) => {
                let (party, recruits_added) = data.restore(roster);
                self.stage = data.stage;
                self.party = party;
                self.recruits_added = recruits_added;
                events.push(SessionEvent::ProgressLoaded {
                    stage: self.stage,
                    recruits_added,
                });
            }
            Ok(None) => events.push(SessionEvent::ProgressUnavailable {
                reason: "no saved progress".into(),
            }),
            Err(error) => events.push(SessionEvent::ProgressUnavailable {
                reason: error.to_string(),
            }),
        }
    }

    fn save(&self, stage: u32, store: &mut dyn ProgressStore, events: &mut Vec<SessionEvent>) -> bool {
        let data = SaveData::capture(stage, &self.party, self.recruits_added);
        match store.save_progress(&data) {
            Ok(()) => {
                events.push(SessionEvent::ProgressSaved(data));
                true
            }
            Err(error) => {
                events.push(SessionEvent::ProgressUnavailable {
                    reason: error.to_string(),
                });
                false
            }
        }
    }
}

fn non_empty(quote: Option<&String>) -> Option<String> {
    quote.filter(|quote| !quote.is_empty()).cloned()
}
