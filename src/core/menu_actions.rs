//! Shared action vocabulary for the launcher screens.
//!
//! Translates raw `KeyEvent`s into key names and semantic `MenuAction`s so the
//! per-screen tables in `input_router` stay readable.

use super::state::MenuState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All possible menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    // Navigation
    NavigateUp,
    NavigateDown,

    /// Switch to another screen
    Open(MenuState),
    /// Leave an info screen (stats, options, credits)
    Back,

    /// Enter/Space - launch the selected entry
    Select,
    Quit,

    // No action (key not bound on this screen)
    None,
}

/// Convert KeyEvent to the key name used by the routing tables
///
/// Names follow the usual terminal conventions: `"up"`, `"enter"`, `"space"`,
/// `"esc"`, `"ctrl+c"`. Plain characters (including shifted ones) map to
/// themselves.
pub fn key_event_to_string(key: KeyEvent) -> String {
    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt");
    }

    let key_str = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => {
            // Shift is already folded into the character
            if parts.is_empty() {
                return c.to_string();
            }
            c.to_ascii_lowercase().to_string()
        }
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        _ => return String::new(), // Unrecognized key
    };

    parts.push(&key_str);
    parts.join("+")
}
