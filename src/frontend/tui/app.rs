use crate::core::LauncherSession;
use crate::frontend::tui::menu_view;
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::AppTheme;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// TUI Frontend using ratatui
///
/// Owns the terminal while the launcher runs: raw mode, alternate screen and
/// mouse capture are switched on in `new` and off in `cleanup`/`Drop`.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    theme: AppTheme,
    /// False once the terminal has been handed back (suspended or cleaned up)
    active: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture, and enters alternate screen.
    pub fn new(theme: AppTheme) -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        let mut frontend = Self {
            terminal,
            theme,
            active: false,
        };
        frontend.enter()?;
        Ok(frontend)
    }

    fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        self.active = true;
        execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture
        )
        .context("Failed to setup terminal")?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::Mouse {
                kind: mouse_event.kind,
                x: mouse_event.column,
                y: mouse_event.row,
            }),
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

/// Block for the first event, then drain whatever is already queued.
///
/// Any read or poll failure aborts the batch.
fn collect_events(
    mut read: impl FnMut() -> io::Result<Event>,
    mut pending: impl FnMut() -> io::Result<bool>,
) -> Result<Vec<FrontendEvent>> {
    let mut events = Vec::new();

    let first = read().context("Failed to read terminal event")?;
    events.extend(TuiFrontend::convert_event(first));
    while pending().context("Failed to poll terminal events")? {
        let ev = read().context("Failed to read terminal event")?;
        events.extend(TuiFrontend::convert_event(ev));
    }

    Ok(events)
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        collect_events(event::read, || event::poll(Duration::ZERO))
    }

    fn render(&mut self, session: &LauncherSession) -> Result<()> {
        let theme = &self.theme;
        self.terminal.draw(|f| {
            let area = f.area();
            menu_view::render(session, theme, area, f.buffer_mut());
        })?;
        Ok(())
    }

    fn suspend<T>(&mut self, run: impl FnOnce() -> T) -> Result<T> {
        self.leave().context("Failed to release terminal")?;
        let result = run();
        self.enter().context("Failed to reclaim terminal")?;
        Ok(result)
    }

    fn cleanup(&mut self) -> Result<()> {
        self.leave()
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
