//! Frontend abstraction layer
//!
//! `main::run_tui` drives the launcher through the `Frontend` trait so the
//! event loop can run against the real terminal or a scripted stand-in.

pub mod events;
pub mod tui;

use crate::core::LauncherSession;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

pub trait Frontend {
    /// Wait for input, then return every event that is already queued.
    ///
    /// Blocks until at least one event arrives; there is no frame timer.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Draw the current session state.
    fn render(&mut self, session: &LauncherSession) -> Result<()>;

    /// Give the terminal away while `run` executes, then take it back.
    ///
    /// Used to hand the screen to a child process. The UI is restored
    /// before this returns, even when `run` reports a failure of its own.
    fn suspend<T>(&mut self, run: impl FnOnce() -> T) -> Result<T>;

    /// Restore the terminal before exit.
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size in cells.
    fn size(&self) -> (u16, u16);
}
