//! Core launcher logic
//!
//! Screen state, key routing and the session aggregate.
//! NO imports from frontend/ or rendering code.

pub mod input_router;
pub mod menu_actions;
pub mod session;
pub mod state;

pub use session::{Effect, LauncherSession};
pub use state::MenuState;
