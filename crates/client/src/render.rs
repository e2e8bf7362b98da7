//! Plain-text frame rendering.
use std::fmt::Write;

use game_core::{CharacterView, GameSnapshot, Phase, SceneTag};

/// Renders one frame of the snapshot.
pub fn render(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();

    match snapshot.scene {
        SceneTag::Title => {
            out.push_str("== BATTLE QUEST ==\n");
            for (index, entry) in snapshot.title_menu.iter().enumerate() {
                let cursor = if index == snapshot.menu_index { '>' } else { ' ' };
                let _ = writeln!(out, "{cursor} {entry}");
            }
        }
        SceneTag::Battle => render_battle(&mut out, snapshot),
        SceneTag::Recruit => {
            if let Some(recruit) = &snapshot.recruit {
                let _ = writeln!(out, "-- {} wants to join --", recruit.name);
                let _ = writeln!(out, "{}", member_line(recruit));
            }
            render_dialogue(&mut out, snapshot);
        }
        SceneTag::Encounter => {
            let names: Vec<_> = snapshot.enemies.iter().map(|e| e.name.as_str()).collect();
            let _ = writeln!(out, "-- {} --", names.join(" & "));
            render_dialogue(&mut out, snapshot);
        }
        SceneTag::Story | SceneTag::Clear | SceneTag::GameOver => {
            render_dialogue(&mut out, snapshot);
        }
    }

    out
}

fn render_dialogue(out: &mut String, snapshot: &GameSnapshot) {
    if let Some(dialogue) = &snapshot.dialogue {
        for line in &dialogue.lines {
            let _ = writeln!(out, "  {line}");
        }
        if dialogue.has_more {
            out.push_str("  ...\n");
        }
    }
}

fn render_battle(out: &mut String, snapshot: &GameSnapshot) {
    let _ = writeln!(
        out,
        "-- Stage {}{} --",
        snapshot.stage + 1,
        if snapshot.final_battle { " (final)" } else { "" }
    );

    for enemy in &snapshot.enemies {
        let _ = writeln!(out, "  {}", member_line(enemy));
    }
    out.push('\n');
    for (index, member) in snapshot.party.iter().enumerate() {
        let marker = if snapshot.current_actor == Some(index) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {}", member_line(member));
    }
    out.push('\n');

    for line in &snapshot.log {
        let _ = writeln!(out, "| {line}");
    }

    if snapshot.pending.is_some() {
        out.push_str("[Enter] continue\n");
        return;
    }

    match snapshot.phase {
        Some(Phase::Player) if !snapshot.options.is_empty() => {
            for (index, option) in snapshot.options.iter().enumerate() {
                let cursor = if index == snapshot.selection { '>' } else { ' ' };
                let label = if option.enabled {
                    option.label.clone()
                } else {
                    format!("({})", option.label)
                };
                let _ = writeln!(out, "{cursor} {label}");
            }
        }
        Some(Phase::Enemy) => out.push_str("[Enter] enemy turn\n"),
        _ => out.push_str("[Enter] continue\n"),
    }
}

fn member_line(view: &CharacterView) -> String {
    let mut line = format!(
        "{} [{}] {}/{}",
        view.name, view.element, view.health, view.max_health
    );
    if !view.alive {
        line.push_str(" KO");
    }
    if view.guarding {
        line.push_str(" guard");
    }
    if view.attack_bonus > 0 {
        let _ = write!(line, " +{}", view.attack_bonus);
    }
    if view.lockout_turns > 0 {
        let _ = write!(line, " sealed:{}", view.lockout_turns);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{DialogueView, Element};

    fn view(name: &str, health: u32) -> CharacterView {
        CharacterView {
            name: name.into(),
            element: Element::Fire,
            weapon: "Mic".into(),
            health,
            max_health: 100,
            guarding: false,
            attack_bonus: 0,
            lockout_turns: 0,
            alive: health > 0,
        }
    }

    fn snapshot(scene: SceneTag) -> GameSnapshot {
        GameSnapshot {
            scene,
            stage: 0,
            recruits_added: 0,
            title_menu: Vec::new(),
            menu_index: 0,
            dialogue: None,
            party: Vec::new(),
            enemies: Vec::new(),
            recruit: None,
            phase: None,
            current_actor: None,
            options: Vec::new(),
            selection: 0,
            log: Vec::new(),
            pending: None,
            final_battle: false,
        }
    }

    #[test]
    fn title_marks_the_highlighted_entry() {
        let mut frame = snapshot(SceneTag::Title);
        frame.title_menu = vec!["New Game".into(), "Continue".into()];
        frame.menu_index = 1;

        let text = render(&frame);
        assert!(text.contains("  New Game"));
        assert!(text.contains("> Continue"));
    }

    #[test]
    fn battle_shows_actor_log_and_status() {
        let mut frame = snapshot(SceneTag::Battle);
        frame.phase = Some(Phase::Player);
        frame.party = vec![view("Hero", 40), view("Sage", 0)];
        frame.enemies = vec![view("Goblin", 100)];
        frame.current_actor = Some(0);
        frame.log = vec!["Goblin appeared!".into()];

        let text = render(&frame);
        assert!(text.contains("* Hero [Fire] 40/100"));
        assert!(text.contains("Sage [Fire] 0/100 KO"));
        assert!(text.contains("| Goblin appeared!"));
    }

    #[test]
    fn dialogue_hints_at_more_lines() {
        let mut frame = snapshot(SceneTag::Story);
        frame.dialogue = Some(DialogueView {
            lines: vec!["Once upon a time".into()],
            has_more: true,
        });

        assert_eq!(render(&frame), "  Once upon a time\n  ...\n");
    }
}
