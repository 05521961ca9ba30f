//! Input routing for the launcher screens
//!
//! Routes keyboard input to a MenuAction based on the active MenuState.
//! Each screen has its own small table; keys missing from a table resolve to
//! `MenuAction::None`.

use crate::core::menu_actions::{key_event_to_string, MenuAction};
use crate::core::state::MenuState;
use crossterm::event::KeyEvent;

/// Route a key event to a MenuAction for the given screen
pub fn route_input(key: KeyEvent, state: MenuState) -> MenuAction {
    let name = key_event_to_string(key);
    match state {
        MenuState::MainMenu => main_menu_action(&name),
        MenuState::TuiAppsMenu => tui_apps_action(&name),
        MenuState::StatsMenu | MenuState::OptionsMenu | MenuState::CreditsMenu => {
            info_screen_action(&name)
        }
    }
}

fn main_menu_action(name: &str) -> MenuAction {
    match name {
        "q" | "ctrl+c" => MenuAction::Quit,
        "up" | "k" => MenuAction::NavigateUp,
        "down" | "j" => MenuAction::NavigateDown,
        "left" | "right" | "t" => MenuAction::Open(MenuState::TuiAppsMenu),
        "enter" | "space" => MenuAction::Select,
        "s" => MenuAction::Open(MenuState::StatsMenu),
        "o" => MenuAction::Open(MenuState::OptionsMenu),
        "c" => MenuAction::Open(MenuState::CreditsMenu),
        _ => MenuAction::None,
    }
}

// No stats/options/credits shortcuts here; those are only reachable from the
// main menu.
fn tui_apps_action(name: &str) -> MenuAction {
    match name {
        "q" | "ctrl+c" => MenuAction::Quit,
        "up" | "k" => MenuAction::NavigateUp,
        "down" | "j" => MenuAction::NavigateDown,
        "left" | "right" => MenuAction::Open(MenuState::MainMenu),
        "enter" | "space" => MenuAction::Select,
        _ => MenuAction::None,
    }
}

fn info_screen_action(name: &str) -> MenuAction {
    match name {
        "q" | "esc" | "backspace" => MenuAction::Back,
        _ => MenuAction::None,
    }
}
