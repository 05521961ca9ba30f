//! Screen state and selection bookkeeping.

/// The active screen of the launcher.
///
/// Every handler and renderer matches on this exhaustively, so adding a
/// screen means touching each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    TuiAppsMenu,
    StatsMenu,
    OptionsMenu,
    CreditsMenu,
}

impl MenuState {
    /// Screen the launcher opens on.
    pub const INITIAL: MenuState = MenuState::TuiAppsMenu;
}

impl Default for MenuState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Move a selection one row up, stopping at the first row.
pub fn select_previous(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move a selection one row down, stopping at the last row (no wraparound).
pub fn select_next(selected: usize, len: usize) -> usize {
    if selected + 1 < len {
        selected + 1
    } else {
        selected.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_tui_apps() {
        assert_eq!(MenuState::default(), MenuState::TuiAppsMenu);
    }

    #[test]
    fn test_select_clamps_at_both_ends() {
        assert_eq!(select_previous(0), 0);
        assert_eq!(select_previous(3), 2);
        assert_eq!(select_next(0, 3), 1);
        assert_eq!(select_next(2, 3), 2);
    }

    #[test]
    fn test_select_on_empty_list_stays_at_zero() {
        assert_eq!(select_next(0, 0), 0);
        assert_eq!(select_previous(0), 0);
    }
}
