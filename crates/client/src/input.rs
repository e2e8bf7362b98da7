//! Line-based input translation.
//!
//! The terminal is read one line at a time; each line maps onto one session
//! command so the rest of the client never looks at raw text.

use game_core::Command;

/// Outcome of reading one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineAction {
    /// Forward the command to the runtime.
    Submit(Command),
    /// Exit the client.
    Quit,
    /// Unrecognized input.
    None,
}

/// Maps a raw line onto a command.
///
/// An empty line confirms, mirroring a bare Enter key.
pub fn translate(line: &str) -> LineAction {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineAction::Submit(Command::Confirm);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "w" | "k" | "up" | "prev" => LineAction::Submit(Command::SelectPrevious),
        "s" | "j" | "down" | "next" => LineAction::Submit(Command::SelectNext),
        "e" | "ok" | "enter" => LineAction::Submit(Command::Confirm),
        "q" | "quit" | "exit" => LineAction::Quit,
        _ => LineAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_and_wasd_keys_move_the_cursor() {
        assert_eq!(translate("w"), LineAction::Submit(Command::SelectPrevious));
        assert_eq!(translate("K"), LineAction::Submit(Command::SelectPrevious));
        assert_eq!(translate("s"), LineAction::Submit(Command::SelectNext));
        assert_eq!(translate("j\n"), LineAction::Submit(Command::SelectNext));
    }

    #[test]
    fn blank_line_confirms() {
        assert_eq!(translate(""), LineAction::Submit(Command::Confirm));
        assert_eq!(translate("   \n"), LineAction::Submit(Command::Confirm));
        assert_eq!(translate("e"), LineAction::Submit(Command::Confirm));
    }

    #[test]
    fn quit_and_unknown_input() {
        assert_eq!(translate("q"), LineAction::Quit);
        assert_eq!(translate("Quit"), LineAction::Quit);
        assert_eq!(translate("dance"), LineAction::None);
    }
}
