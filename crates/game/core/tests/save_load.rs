mod common;

use common::{FixtureRoster, Harness};
use game_core::{
    BattleCommand, Command, ProgressError, ProgressStore, SaveData, SavedMember, SceneTag,
    SessionEvent,
};

fn saved(name: &str, current_health: u32, max_health: u32) -> SavedMember {
    SavedMember {
        name: name.into(),
        current_health,
        max_health,
    }
}

fn continue_game<S: ProgressStore>(h: &mut Harness<S>) -> Vec<SessionEvent> {
    h.send(Command::SelectNext);
    h.confirm().events
}

struct BrokenStore;

impl ProgressStore for BrokenStore {
    fn load_progress(&self) -> Result<Option<SaveData>, ProgressError> {
        Err(ProgressError::Corrupt("expected value at line 1".into()))
    }

    fn save_progress(&mut self, _data: &SaveData) -> Result<(), ProgressError> {
        Err(ProgressError::Unavailable("read-only".into()))
    }
}

#[test]
fn continue_restores_stage_recruits_and_health() {
    let save = SaveData {
        stage: 2,
        recruits_added: 1,
        party: vec![saved("Hero", 40, 100), saved("Scout", 10, 60), saved("Ghost", 5, 5)],
    };
    let mut h = Harness::new(FixtureRoster::sturdy_enemies(), Some(save));

    let events = continue_game(&mut h);

    assert!(events.contains(&SessionEvent::ProgressLoaded {
        stage: 2,
        recruits_added: 1,
    }));
    assert_eq!(h.scene(), SceneTag::Story);
    assert_eq!(h.session.stage(), 2);
    let party: Vec<_> = h
        .session
        .party()
        .iter()
        .map(|member| (member.name.as_str(), member.health()))
        .collect();
    assert_eq!(party, vec![("Hero", 40), ("Sage", 80), ("Scout", 10)]);

    h.confirm_until_battle();
    assert_eq!(h.session.battle().unwrap().enemies()[0].name, "Goblin 2");
}

#[test]
fn save_and_quit_round_trips_through_continue() {
    let save = SaveData {
        stage: 2,
        recruits_added: 1,
        party: vec![saved("Hero", 40, 100), saved("Scout", 10, 60)],
    };
    let mut h = Harness::new(FixtureRoster::sturdy_enemies(), Some(save));
    continue_game(&mut h);
    h.confirm_until_battle();

    let outcome = h.act(BattleCommand::SaveAndQuit);

    let expected = SaveData {
        stage: 2,
        recruits_added: 1,
        party: vec![
            saved("Hero", 40, 100),
            saved("Sage", 80, 80),
            saved("Scout", 10, 60),
        ],
    };
    assert!(outcome
        .events
        .contains(&SessionEvent::ProgressSaved(expected.clone())));
    assert_eq!(h.store, Some(expected));

    let battle = h.session.battle().unwrap();
    assert_eq!(battle.log().last(), Some("Progress saved. It is safe to quit now."));
    assert_eq!(battle.current_actor(), 0);
    assert_eq!(battle.player_queue().len(), 3);

    let mut reloaded = Harness::new(FixtureRoster::sturdy_enemies(), h.store.clone());
    continue_game(&mut reloaded);
    assert_eq!(reloaded.session.party(), h.session.party());
    assert_eq!(reloaded.session.recruits_added(), 1);
}

#[test]
fn loaded_values_are_clamped_to_the_roster() {
    let save = SaveData {
        stage: 1,
        recruits_added: 9,
        party: vec![saved("Hero", 9_999, 9_999), saved("Sage", 0, 80)],
    };
    let mut h = Harness::new(FixtureRoster::sturdy_enemies(), Some(save));

    continue_game(&mut h);

    let party = h.session.party();
    assert_eq!(h.session.recruits_added(), 2);
    assert_eq!(party.len(), 4);
    assert_eq!(party[0].health(), 100);
    assert_eq!(party[1].health(), 0);
    assert_eq!(party[0].skills.len(), 3);
}

#[test]
fn missing_save_starts_fresh() {
    let mut h = Harness::new(FixtureRoster::sturdy_enemies(), None);

    let events = continue_game(&mut h);

    assert!(events.contains(&SessionEvent::ProgressUnavailable {
        reason: "no saved progress".into()
    }));
    assert_eq!(h.session.stage(), 0);
    assert_eq!(h.session.party().len(), 2);
    assert_eq!(h.scene(), SceneTag::Story);
}

#[test]
fn broken_store_fails_closed() {
    let mut h = Harness::new(FixtureRoster::sturdy_enemies(), BrokenStore);

    let events = continue_game(&mut h);
    assert!(events
        .iter()
        .any(|event| matches!(event, SessionEvent::ProgressUnavailable { .. })));
    assert_eq!(h.session.stage(), 0);
    assert_eq!(h.session.recruits_added(), 0);

    h.confirm_until_battle();
    let outcome = h.act(BattleCommand::SaveAndQuit);
    assert!(outcome.events.contains(&SessionEvent::ProgressUnavailable {
        reason: "progress store unavailable: read-only".into()
    }));
    assert_eq!(h.session.battle().unwrap().log().last(), Some("Saving failed!"));
}

#[cfg(feature = "serde")]
#[test]
fn save_data_uses_camel_case_keys_and_defaults() {
    let save = SaveData {
        stage: 3,
        recruits_added: 2,
        party: vec![saved("Hero", 12, 100)],
    };

    let json = serde_json::to_value(&save).unwrap();
    assert_eq!(json["recruitsAdded"], 2);
    assert_eq!(json["party"][0]["currentHealth"], 12);
    assert_eq!(json["party"][0]["maxHealth"], 100);

    let minimal: SaveData = serde_json::from_str(r#"{"stage":3}"#).unwrap();
    assert_eq!(minimal.recruits_added, 0);
    assert!(minimal.party.is_empty());
}
