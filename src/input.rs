//! Input events and how keys map onto them.
//!
//! Two sources feed the game: the physical keyboard (terminal key events) and
//! the on-screen keyboard, whose keys are identified by their labels.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Label of the on-screen delete key.
pub const DELETE_LABEL: &str = "DEL";
/// Label of the on-screen submit key.
pub const ENTER_LABEL: &str = "ENTER";

/// On-screen keyboard, top row first.
pub const KEYBOARD: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &[DELETE_LABEL, "Z", "X", "C", "V", "B", "N", "M", ENTER_LABEL],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Letter(char),
    Delete,
    Submit,
    Restart,
    Quit,
}

impl InputEvent {
    /// Map an on-screen key label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            DELETE_LABEL => Some(InputEvent::Delete),
            ENTER_LABEL => Some(InputEvent::Submit),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(InputEvent::Letter(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }

    /// Map a terminal key event. Releases and unbound keys yield `None`.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(InputEvent::Quit),
            KeyCode::Char('r') if ctrl => Some(InputEvent::Restart),
            KeyCode::F(5) => Some(InputEvent::Restart),
            KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Enter => Some(InputEvent::Submit),
            KeyCode::Backspace | KeyCode::Delete => Some(InputEvent::Delete),
            KeyCode::Char(c) if !ctrl => Some(InputEvent::Letter(c)),
            _ => None,
        }
    }

    /// Whether this event drives the grid, as opposed to controlling the session.
    pub fn is_game_key(self) -> bool {
        matches!(
            self,
            InputEvent::Letter(_) | InputEvent::Delete | InputEvent::Submit
        )
    }
}
