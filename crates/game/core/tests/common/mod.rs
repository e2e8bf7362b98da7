#![allow(dead_code)]

use game_core::{
    BattleCommand, Character, CharacterTemplate, Command, Element, GameConfig, GameEnv,
    GameSession, PcgRng, ProgressStore, RosterOracle, SceneTag, ScriptOracle, Skill, StepOutcome,
};

/// Small roster: two founders, two recruits, one goblin per stage and a
/// twin encounter at the final stage.
pub struct FixtureRoster {
    pub enemy_attack: u32,
    pub enemy_health: u32,
    pub final_stage: u32,
}

impl FixtureRoster {
    pub fn sturdy_enemies() -> Self {
        Self {
            enemy_attack: 1,
            enemy_health: 10_000,
            final_stage: 4,
        }
    }

    pub fn frail_enemies() -> Self {
        Self {
            enemy_attack: 1,
            enemy_health: 1,
            final_stage: 4,
        }
    }

    fn enemy(&self, name: &str) -> Character {
        CharacterTemplate::new(name, Element::Wind, self.enemy_attack, 0, self.enemy_health)
            .with_skill(Skill::strike("Claw", 10, "Grr!"))
            .spawn_enemy()
    }
}

impl RosterOracle for FixtureRoster {
    fn starting_party(&self) -> Vec<Character> {
        vec![
            CharacterTemplate::new("Hero", Element::Fire, 10, 0, 100)
                .with_skill(Skill::strike("Blaze", 10, "Burn!"))
                .with_skill(Skill::charge("Focus", GameConfig::CHARGE_BONUS, ""))
                .with_skill(Skill::recoil("Burst", 15, ""))
                .spawn(),
            CharacterTemplate::new("Sage", Element::Water, 5, 2, 80)
                .with_skill(Skill::strike("Ripple", 10, ""))
                .spawn(),
        ]
    }

    fn recruits(&self) -> Vec<Character> {
        vec![
            CharacterTemplate::new("Scout", Element::Wind, 6, 1, 60)
                .with_skill(Skill::strike("Gust", 10, ""))
                .spawn(),
            CharacterTemplate::new("Monk", Element::Psychic, 4, 3, 90)
                .with_skill(Skill::strike("Palm", 10, ""))
                .spawn(),
        ]
    }

    fn enemies_for_stage(&self, stage: u32) -> Vec<Character> {
        if stage >= self.final_stage {
            return vec![self.enemy("Twin A"), self.enemy("Twin B")];
        }
        vec![self.enemy(&format!("Goblin {stage}"))]
    }

    fn final_stage(&self) -> u32 {
        self.final_stage
    }
}

pub struct FixtureScript;

impl ScriptOracle for FixtureScript {
    fn story_lines(&self) -> Vec<String> {
        vec!["Once upon a time.".into(), "The band set out.".into()]
    }

    fn encounter_lines(&self, enemies: &[Character]) -> Vec<String> {
        let name = enemies.first().map(|e| e.name.clone()).unwrap_or_default();
        vec![format!("{name}: Halt!"), "Hero: Never!".into(), format!("{name}: Then fight!")]
    }

    fn recruit_lines(&self, name: &str) -> Vec<String> {
        vec![format!("{name}: Count me in!")]
    }

    fn clear_lines(&self) -> Vec<String> {
        vec!["The end.".into()]
    }

    fn game_over_lines(&self) -> Vec<String> {
        vec!["GAME OVER".into()]
    }
}

pub struct Harness<S: ProgressStore> {
    pub roster: FixtureRoster,
    pub script: FixtureScript,
    pub rng: PcgRng,
    pub store: S,
    pub session: GameSession,
}

impl<S: ProgressStore> Harness<S> {
    pub fn new(roster: FixtureRoster, store: S) -> Self {
        Self {
            roster,
            script: FixtureScript,
            rng: PcgRng,
            store,
            session: GameSession::new(GameConfig::default(), 42),
        }
    }

    pub fn send(&mut self, command: Command) -> StepOutcome {
        let env = GameEnv::new(&self.roster, &self.script, &self.rng);
        self.session.step(&env, &mut self.store, command)
    }

    pub fn confirm(&mut self) -> StepOutcome {
        self.send(Command::Confirm)
    }

    pub fn scene(&self) -> SceneTag {
        self.session.scene().tag()
    }

    /// Confirms until the battle scene opens.
    pub fn confirm_until_battle(&mut self) {
        for _ in 0..16 {
            if self.scene() == SceneTag::Battle {
                return;
            }
            self.confirm();
        }
        panic!("battle never started");
    }

    /// Highlights `command` in the battle menu.
    pub fn highlight(&mut self, command: BattleCommand) {
        let snapshot = self.session.snapshot();
        let target = snapshot
            .options
            .iter()
            .position(|option| option.command == command)
            .expect("command not in menu");
        while self.session.snapshot().selection != target {
            self.send(Command::SelectNext);
        }
    }

    /// Highlights and runs `command` for the current actor.
    pub fn act(&mut self, command: BattleCommand) -> StepOutcome {
        self.highlight(command);
        self.confirm()
    }
}
