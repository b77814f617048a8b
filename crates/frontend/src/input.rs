//! Input processing for the terminal client.
//!
//! The animation is not interactive; the only command is leaving it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// No meaningful command was produced.
    None,
}

/// Maps a key press to a [`KeyAction`]. Key releases and repeats are ignored.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Char('c'))), KeyAction::None);
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Enter)), KeyAction::None);
    }
}
