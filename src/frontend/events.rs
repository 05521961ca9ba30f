//! Frontend-agnostic input events.
//!
//! The terminal frontend translates crossterm's event stream into this enum
//! so the event loop only handles one event shape.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input (captured so clicks don't leak into the shell; unused)
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
}

impl FrontendEvent {
    /// Create a key event
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    /// Create a resize event
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    /// The key press carried by this event, if any.
    pub fn as_key_event(&self) -> Option<KeyEvent> {
        match self {
            Self::Key { code, modifiers } => Some(KeyEvent::new(*code, *modifiers)),
            Self::Mouse { .. } | Self::Resize { .. } => None,
        }
    }
}
