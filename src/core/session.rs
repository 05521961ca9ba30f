use crate::config::{Achievement, Config, GlobalStats, LaunchableEntry};
use crate::core::input_router::route_input;
use crate::core::menu_actions::MenuAction;
use crate::core::state::{select_next, select_previous, MenuState};
use crate::launcher::LaunchOutcome;
use crossterm::event::KeyEvent;

/// Side effect requested by a key press; the event loop carries it out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Launch(LaunchableEntry),
    Quit,
}

/// Launcher session state (frontend-agnostic)
///
/// Owns the entry lists, selections and active screen. Only `handle_key`,
/// `handle_resize` and `record_outcome` mutate it.
#[derive(Debug, Clone)]
pub struct LauncherSession {
    pub games: Vec<LaunchableEntry>,
    pub tui_apps: Vec<LaunchableEntry>,
    selected_game: usize,
    selected_tui_app: usize,
    menu_state: MenuState,
    pub width: u16,
    pub height: u16,
    pub stats: GlobalStats,
    pub achievements: Vec<Achievement>,
    pub title: String,
    /// Outcome of the last launch, cleared by the next handled key
    status: Option<String>,
}

impl LauncherSession {
    pub fn new(games: Vec<LaunchableEntry>, tui_apps: Vec<LaunchableEntry>) -> Self {
        Self {
            games,
            tui_apps,
            selected_game: 0,
            selected_tui_app: 0,
            menu_state: MenuState::INITIAL,
            width: 0,
            height: 0,
            stats: GlobalStats::default(),
            achievements: Vec::new(),
            title: crate::config::LauncherInfo::default().title,
            status: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            stats: config.stats.global.clone(),
            achievements: config.stats.achievements.clone(),
            title: config.launcher.title.clone(),
            ..Self::new(config.games.clone(), config.tui_apps.clone())
        }
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu_state
    }

    pub fn selected_game(&self) -> usize {
        self.selected_game
    }

    pub fn selected_tui_app(&self) -> usize {
        self.selected_tui_app
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Translate a key press on the active screen into a state change and,
    /// for launch/quit, an effect for the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        let action = route_input(key, self.menu_state);
        if action == MenuAction::None {
            return None;
        }
        self.status = None;
        self.apply(action)
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Show the result of a launch. The active screen stays as it was.
    pub fn record_outcome(&mut self, outcome: &LaunchOutcome) {
        self.status = Some(outcome.to_string());
    }

    fn apply(&mut self, action: MenuAction) -> Option<Effect> {
        match action {
            MenuAction::NavigateUp => {
                if let Some((selected, _)) = self.active_selection_mut() {
                    *selected = select_previous(*selected);
                }
                None
            }
            MenuAction::NavigateDown => {
                if let Some((selected, len)) = self.active_selection_mut() {
                    *selected = select_next(*selected, len);
                }
                None
            }
            MenuAction::Open(state) => {
                tracing::debug!(from = ?self.menu_state, to = ?state, "Switching screen");
                self.menu_state = state;
                None
            }
            MenuAction::Back => {
                self.menu_state = MenuState::MainMenu;
                None
            }
            MenuAction::Select => {
                let entry = self.selected_entry().cloned();
                if entry.is_none() {
                    tracing::debug!(screen = ?self.menu_state, "Nothing to launch");
                }
                entry.map(Effect::Launch)
            }
            MenuAction::Quit => Some(Effect::Quit),
            MenuAction::None => None,
        }
    }

    /// Entry list shown on the active screen, if it has one.
    pub fn active_list(&self) -> Option<(&[LaunchableEntry], usize)> {
        match self.menu_state {
            MenuState::MainMenu => Some((self.games.as_slice(), self.selected_game)),
            MenuState::TuiAppsMenu => Some((self.tui_apps.as_slice(), self.selected_tui_app)),
            MenuState::StatsMenu | MenuState::OptionsMenu | MenuState::CreditsMenu => None,
        }
    }

    pub fn selected_entry(&self) -> Option<&LaunchableEntry> {
        self.active_list()
            .and_then(|(entries, selected)| entries.get(selected))
    }

    fn active_selection_mut(&mut self) -> Option<(&mut usize, usize)> {
        match self.menu_state {
            MenuState::MainMenu => Some((&mut self.selected_game, self.games.len())),
            MenuState::TuiAppsMenu => Some((&mut self.selected_tui_app, self.tui_apps.len())),
            MenuState::StatsMenu | MenuState::OptionsMenu | MenuState::CreditsMenu => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entry(name: &str) -> LaunchableEntry {
        LaunchableEntry {
            id: name.to_lowercase(),
            name: name.to_string(),
            command: format!("echo {}", name),
            ..Default::default()
        }
    }

    fn session(games: usize, apps: usize) -> LauncherSession {
        LauncherSession::new(
            (0..games).map(|i| entry(&format!("Game{}", i))).collect(),
            (0..apps).map(|i| entry(&format!("App{}", i))).collect(),
        )
    }

    #[test]
    fn test_starts_on_tui_apps() {
        let s = session(2, 2);
        assert_eq!(s.menu_state(), MenuState::TuiAppsMenu);
        assert_eq!(s.selected_tui_app(), 0);
        assert_eq!(s.selected_game(), 0);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut s = session(0, 4);
        let presses = [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Char('j'),
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Char('k'),
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Up,
        ];
        for code in presses {
            s.handle_key(key(code));
            assert!(s.selected_tui_app() < 4);
        }
        assert_eq!(s.selected_tui_app(), 0);

        for _ in 0..10 {
            s.handle_key(key(KeyCode::Down));
        }
        assert_eq!(s.selected_tui_app(), 3);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut s = session(0, 0);
        for code in [KeyCode::Up, KeyCode::Down, KeyCode::Char('j')] {
            assert_eq!(s.handle_key(key(code)), None);
            assert_eq!(s.selected_tui_app(), 0);
        }
        s.handle_key(key(KeyCode::Left));
        assert_eq!(s.menu_state(), MenuState::MainMenu);
        s.handle_key(key(KeyCode::Down));
        assert_eq!(s.selected_game(), 0);
    }

    #[test]
    fn test_launch_on_empty_list_is_rejected() {
        let mut s = session(0, 0);
        assert_eq!(s.handle_key(key(KeyCode::Enter)), None);
        s.handle_key(key(KeyCode::Right));
        assert_eq!(s.handle_key(key(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_select_launches_highlighted_entry() {
        let mut s = session(3, 3);
        s.handle_key(key(KeyCode::Down));
        match s.handle_key(key(KeyCode::Enter)) {
            Some(Effect::Launch(e)) => assert_eq!(e.name, "App1"),
            other => panic!("expected launch, got {:?}", other),
        }

        s.handle_key(key(KeyCode::Left));
        s.handle_key(key(KeyCode::Down));
        s.handle_key(key(KeyCode::Down));
        match s.handle_key(key(KeyCode::Char(' '))) {
            Some(Effect::Launch(e)) => assert_eq!(e.name, "Game2"),
            other => panic!("expected launch, got {:?}", other),
        }
        // Selections are tracked per list
        assert_eq!(s.selected_tui_app(), 1);
    }

    #[test]
    fn test_screen_transitions() {
        let mut s = session(1, 1);
        s.handle_key(key(KeyCode::Left));
        assert_eq!(s.menu_state(), MenuState::MainMenu);
        s.handle_key(key(KeyCode::Char('t')));
        assert_eq!(s.menu_state(), MenuState::TuiAppsMenu);

        for (shortcut, target) in [
            ('s', MenuState::StatsMenu),
            ('o', MenuState::OptionsMenu),
            ('c', MenuState::CreditsMenu),
        ] {
            s.handle_key(key(KeyCode::Right));
            assert_eq!(s.menu_state(), MenuState::MainMenu);
            s.handle_key(key(KeyCode::Char(shortcut)));
            assert_eq!(s.menu_state(), target);
            s.handle_key(key(KeyCode::Char('q')));
            assert_eq!(s.menu_state(), MenuState::MainMenu);
            s.handle_key(key(KeyCode::Char('t')));
        }
    }

    #[test]
    fn test_tui_apps_shortcuts_do_nothing() {
        let mut s = session(1, 1);
        for c in ['s', 'o', 'c'] {
            assert_eq!(s.handle_key(key(KeyCode::Char(c))), None);
            assert_eq!(s.menu_state(), MenuState::TuiAppsMenu);
        }
    }

    #[test]
    fn test_info_screens_return_to_main() {
        for back in [KeyCode::Char('q'), KeyCode::Esc, KeyCode::Backspace] {
            let mut s = session(1, 1);
            s.handle_key(key(KeyCode::Left));
            s.handle_key(key(KeyCode::Char('s')));
            assert_eq!(s.handle_key(key(back)), None);
            assert_eq!(s.menu_state(), MenuState::MainMenu);
        }
    }

    #[test]
    fn test_quit_from_list_screens() {
        let mut s = session(1, 1);
        assert_eq!(s.handle_key(key(KeyCode::Char('q'))), Some(Effect::Quit));
        s.handle_key(key(KeyCode::Left));
        assert_eq!(
            s.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Effect::Quit)
        );
    }

    #[test]
    fn test_unbound_keys_change_nothing() {
        let mut s = session(2, 2);
        s.handle_key(key(KeyCode::Down));
        s.record_outcome(&LaunchOutcome::Returned {
            name: "App1".to_string(),
        });
        for code in [KeyCode::Char('x'), KeyCode::F(5), KeyCode::Tab, KeyCode::Insert] {
            assert_eq!(s.handle_key(key(code)), None);
        }
        assert_eq!(s.menu_state(), MenuState::TuiAppsMenu);
        assert_eq!(s.selected_tui_app(), 1);
        assert_eq!(s.status(), Some("Returned from App1"));
    }

    #[test]
    fn test_outcome_keeps_screen_and_clears_on_next_key() {
        let mut s = session(1, 1);
        s.record_outcome(&LaunchOutcome::Failed {
            name: "App0".to_string(),
            detail: "exit status: 1".to_string(),
        });
        assert_eq!(s.menu_state(), MenuState::TuiAppsMenu);
        assert_eq!(s.status(), Some("Error launching App0: exit status: 1"));

        s.handle_key(key(KeyCode::Down));
        assert_eq!(s.status(), None);
    }

    #[test]
    fn test_from_config_and_resize() {
        let mut config = Config::default();
        config.launcher.title = "Arcade".to_string();
        config.stats.global.games_played = 12;
        config.games.push(entry("Tetris"));

        let mut s = LauncherSession::from_config(&config);
        assert_eq!(s.title, "Arcade");
        assert_eq!(s.stats.games_played, 12);
        assert_eq!(s.games.len(), 1);
        assert!(s.tui_apps.is_empty());

        s.handle_resize(120, 40);
        assert_eq!((s.width, s.height), (120, 40));
        assert_eq!(s.menu_state(), MenuState::TuiAppsMenu);
    }
}
