//! TUI Frontend (ratatui-based)
//!
//! Implements the Frontend trait using ratatui for rendering and crossterm
//! for event handling and terminal management.

pub mod app;
pub mod menu_view;

pub use app::TuiFrontend;
