//! tui-hub - terminal launcher for games and TUI applications
//!
//! Lists configured entries, runs the selected one as a child process with
//! the terminal handed over, and comes back to the menu when it exits.

mod config;
mod core;
mod frontend;
mod launcher;
mod logging;
mod theme;

use anyhow::{Context, Result};
use crate::core::{Effect, LauncherSession};
use crate::frontend::{Frontend, FrontendEvent, TuiFrontend};
use crate::launcher::Launcher;

fn main() -> Result<()> {
    // Logging goes to a file; a failure here must not stop the launcher
    match config::Config::log_dir() {
        Ok(log_dir) => {
            if let Err(e) = logging::init(&log_dir) {
                eprintln!("tui-hub: logging disabled: {:#}", e);
            }
        }
        Err(e) => eprintln!("tui-hub: logging disabled: {:#}", e),
    }

    let config = config::Config::load();
    let launcher = Launcher::new(config.base_dir());
    let theme = theme::AppTheme::from_name(&config.settings.theme);
    tracing::info!(
        games = config.games.len(),
        tui_apps = config.tui_apps.len(),
        base_dir = %launcher.base_dir().display(),
        theme = %theme.name,
        "Starting launcher"
    );

    let mut session = LauncherSession::from_config(&config);
    let mut frontend = TuiFrontend::new(theme).context("Failed to initialize terminal UI")?;

    let result = run_tui(&mut frontend, &mut session, &launcher);
    shutdown(&mut frontend, result)
}

/// Restore the terminal and report how the loop ended.
///
/// The loop's own error wins over a cleanup error; both are logged.
fn shutdown<F: Frontend>(frontend: &mut F, result: Result<()>) -> Result<()> {
    match &result {
        Ok(()) => tracing::info!("Launcher exited"),
        Err(e) => tracing::error!(error = %format!("{:#}", e), "Launcher stopped"),
    }

    let cleanup = frontend.cleanup().context("Failed to restore terminal");
    if let Err(e) = &cleanup {
        tracing::error!(error = %format!("{:#}", e), "Terminal cleanup failed");
    }
    result.and(cleanup)
}

/// Main event loop: read input, update the session, launch, redraw.
///
/// Returns once the user quits. Launches block the loop until the child
/// exits.
fn run_tui<F: Frontend>(
    frontend: &mut F,
    session: &mut LauncherSession,
    launcher: &Launcher,
) -> Result<()> {
    let (width, height) = frontend.size();
    session.handle_resize(width, height);
    frontend.render(session)?;

    loop {
        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key { .. } => {
                    let Some(key) = event.as_key_event() else {
                        continue;
                    };
                    match session.handle_key(key) {
                        Some(Effect::Launch(entry)) => {
                            let outcome = frontend.suspend(|| launcher.launch(&entry))?;
                            // The child may have left the terminal at another size
                            let (width, height) = frontend.size();
                            session.handle_resize(width, height);
                            session.record_outcome(&outcome);
                        }
                        Some(Effect::Quit) => return Ok(()),
                        None => {}
                    }
                }
                FrontendEvent::Resize { width, height } => {
                    session.handle_resize(width, height);
                }
                FrontendEvent::Mouse { kind, x, y } => {
                    tracing::trace!(?kind, x, y, "Ignoring mouse event");
                }
            }
        }
        frontend.render(session)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchableEntry;
    use crate::core::MenuState;
    use anyhow::bail;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::collections::VecDeque;

    /// Plays back canned event batches instead of reading a terminal.
    struct ScriptedFrontend {
        batches: VecDeque<Vec<FrontendEvent>>,
        renders: usize,
        suspensions: usize,
        suspended: bool,
        size: (u16, u16),
        last_status: Option<String>,
        fail_cleanup: bool,
        cleaned_up: bool,
    }

    impl ScriptedFrontend {
        fn new(batches: Vec<Vec<FrontendEvent>>) -> Self {
            Self {
                batches: batches.into(),
                renders: 0,
                suspensions: 0,
                suspended: false,
                size: (100, 30),
                last_status: None,
                fail_cleanup: false,
                cleaned_up: false,
            }
        }
    }

    impl Frontend for ScriptedFrontend {
        fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
            match self.batches.pop_front() {
                Some(batch) => Ok(batch),
                None => bail!("script exhausted"),
            }
        }

        fn render(&mut self, session: &LauncherSession) -> Result<()> {
            assert!(!self.suspended, "rendered while the terminal was handed off");
            self.renders += 1;
            self.last_status = session.status().map(str::to_string);
            Ok(())
        }

        fn suspend<T>(&mut self, run: impl FnOnce() -> T) -> Result<T> {
            self.suspended = true;
            self.suspensions += 1;
            let result = run();
            self.suspended = false;
            Ok(result)
        }

        fn cleanup(&mut self) -> Result<()> {
            self.cleaned_up = true;
            if self.fail_cleanup {
                bail!("terminal already gone");
            }
            Ok(())
        }

        fn size(&self) -> (u16, u16) {
            self.size
        }
    }

    fn key(code: KeyCode) -> FrontendEvent {
        FrontendEvent::key(code, KeyModifiers::NONE)
    }

    fn app(name: &str, command: &str) -> LaunchableEntry {
        LaunchableEntry {
            id: name.to_lowercase(),
            name: name.to_string(),
            command: command.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_quit_ends_loop() {
        let mut frontend = ScriptedFrontend::new(vec![vec![key(KeyCode::Char('q'))]]);
        let mut session = LauncherSession::new(Vec::new(), Vec::new());
        let launcher = Launcher::new(std::env::temp_dir());

        run_tui(&mut frontend, &mut session, &launcher).unwrap();
        assert_eq!(frontend.renders, 1);
        assert_eq!((session.width, session.height), (100, 30));
    }

    #[test]
    fn test_resize_and_navigation_are_applied() {
        let mut frontend = ScriptedFrontend::new(vec![
            vec![FrontendEvent::resize(140, 50), key(KeyCode::Down)],
            vec![key(KeyCode::Left), key(KeyCode::Char('s'))],
            vec![key(KeyCode::Esc), key(KeyCode::Char('q'))],
        ]);
        let mut session =
            LauncherSession::new(Vec::new(), vec![app("A", "true"), app("B", "true")]);
        let launcher = Launcher::new(std::env::temp_dir());

        run_tui(&mut frontend, &mut session, &launcher).unwrap();
        assert_eq!(session.selected_tui_app(), 1);
        assert_eq!(session.menu_state(), MenuState::MainMenu);
        assert_eq!((session.width, session.height), (140, 50));
        assert_eq!(frontend.renders, 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_suspends_and_reports() {
        let mut frontend = ScriptedFrontend::new(vec![
            vec![key(KeyCode::Enter)],
            vec![key(KeyCode::Down), key(KeyCode::Char(' '))],
            vec![key(KeyCode::Char('q'))],
        ]);
        let mut session = LauncherSession::new(
            Vec::new(),
            vec![
                app("Good", "true"),
                app("Broken", "tui-hub-no-such-command-xyz"),
            ],
        );
        let launcher = Launcher::new(std::env::temp_dir());

        run_tui(&mut frontend, &mut session, &launcher).unwrap();
        assert_eq!(frontend.suspensions, 2);
        assert_eq!(session.menu_state(), MenuState::TuiAppsMenu);
        // Quitting clears the status, so check what the last frame showed
        let shown = frontend.last_status.unwrap_or_default();
        assert!(shown.starts_with("Error launching Broken: "), "{}", shown);
        assert_eq!(session.status(), None);
    }

    #[test]
    fn test_frontend_errors_propagate() {
        let mut frontend = ScriptedFrontend::new(Vec::new());
        let mut session = LauncherSession::new(Vec::new(), Vec::new());
        let launcher = Launcher::new(std::env::temp_dir());

        assert!(run_tui(&mut frontend, &mut session, &launcher).is_err());
    }

    #[test]
    fn test_shutdown_keeps_loop_error_over_cleanup_error() {
        let mut frontend = ScriptedFrontend::new(Vec::new());
        frontend.fail_cleanup = true;

        let err = shutdown(&mut frontend, Err(anyhow::anyhow!("loop broke"))).unwrap_err();
        assert!(frontend.cleaned_up);
        assert_eq!(err.to_string(), "loop broke");
    }

    #[test]
    fn test_shutdown_reports_cleanup_error_after_clean_exit() {
        let mut frontend = ScriptedFrontend::new(Vec::new());
        frontend.fail_cleanup = true;

        let err = shutdown(&mut frontend, Ok(())).unwrap_err();
        assert!(format!("{:#}", err).contains("terminal already gone"));

        let mut frontend = ScriptedFrontend::new(Vec::new());
        assert!(shutdown(&mut frontend, Ok(())).is_ok());
        assert!(frontend.cleaned_up);
    }
}
