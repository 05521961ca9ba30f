//! Screen layouts for the launcher.
//!
//! `screen_lines` turns a `LauncherSession` into styled lines without touching
//! the terminal; `render` paints them into a buffer with the legend and
//! status line pinned to the bottom. One body builder per `MenuState`.
//! Lists longer than the viewport scroll to keep the selection visible.

use crate::config::{Achievement, LaunchableEntry};
use crate::core::{LauncherSession, MenuState};
use crate::theme::AppTheme;
use std::ops::Range;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Display width reserved for the icon + name cell. Descriptions start right
/// after it.
pub const NAME_COLUMN_WIDTH: usize = 34;

const MAIN_LEGEND: &[(&str, &str)] = &[
    ("enter", "launch"),
    ("↑↓", "navigate"),
    ("←→", "swap menu"),
    ("t", "apps"),
    ("s", "stats"),
    ("o", "options"),
    ("c", "credits"),
    ("q", "quit"),
];

const TUI_APPS_LEGEND: &[(&str, &str)] = &[
    ("enter", "launch"),
    ("↑↓", "navigate"),
    ("←→", "swap menu"),
    ("q", "quit"),
];

const BACK_LEGEND: &[(&str, &str)] = &[("esc", "back")];

/// One screen split into a scrolling body and a footer pinned to the bottom
/// (legend, then the status line when there is one).
struct Screen {
    body: Vec<Line<'static>>,
    footer: Vec<Line<'static>>,
}

impl Screen {
    fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines = self.body;
        lines.extend(self.footer);
        lines
    }
}

pub fn render(session: &LauncherSession, theme: &AppTheme, area: Rect, buf: &mut Buffer) {
    let screen = build_screen(session, theme, Some(area.height));
    let [body_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(screen.footer.len() as u16),
    ])
    .areas(area);
    Paragraph::new(screen.body).render(body_area, buf);
    Paragraph::new(screen.footer).render(footer_area, buf);
}

/// Every line of the active screen, fitted to the session's viewport height
/// (unbounded until the first resize).
pub fn screen_lines(session: &LauncherSession, theme: &AppTheme) -> Vec<Line<'static>> {
    let height = (session.height > 0).then_some(session.height);
    build_screen(session, theme, height).into_lines()
}

fn build_screen(session: &LauncherSession, theme: &AppTheme, height: Option<u16>) -> Screen {
    let bindings = match session.menu_state() {
        MenuState::MainMenu => MAIN_LEGEND,
        MenuState::TuiAppsMenu => TUI_APPS_LEGEND,
        MenuState::StatsMenu | MenuState::OptionsMenu | MenuState::CreditsMenu => BACK_LEGEND,
    };
    let mut footer = vec![Line::default(), legend(bindings, theme)];
    if let Some(status) = session.status() {
        footer.push(Line::default());
        footer.push(Line::from(Span::styled(
            status.to_string(),
            theme.command_style(),
        )));
    }

    // Rows left for the body once the footer is pinned
    let room = height.map(|h| usize::from(h).saturating_sub(footer.len()));
    let body = match session.menu_state() {
        MenuState::MainMenu => list_body(
            &format!("🎮 {}", session.title),
            &session.games,
            session.selected_game(),
            session.width,
            room,
            theme,
        ),
        MenuState::TuiAppsMenu => list_body(
            "🖥️  TUI Applications",
            &session.tui_apps,
            session.selected_tui_app(),
            session.width,
            room,
            theme,
        ),
        MenuState::StatsMenu => stats_body(session, theme),
        MenuState::OptionsMenu => options_body(theme),
        MenuState::CreditsMenu => credits_body(session, theme),
    };

    Screen { body, footer }
}

fn header(text: &str, theme: &AppTheme) -> Line<'static> {
    Line::from(Span::styled(format!(" {} ", text), theme.header_style()))
}

/// Pad the first cell so the second one starts at `NAME_COLUMN_WIDTH`.
fn two_columns(name: Span<'static>, description: Span<'static>) -> Line<'static> {
    let gap = NAME_COLUMN_WIDTH.saturating_sub(name.width()).max(1);
    Line::from(vec![name, Span::raw(" ".repeat(gap)), description])
}

fn entry_row(entry: &LaunchableEntry, selected: bool, theme: &AppTheme) -> Line<'static> {
    let name = if entry.icon.is_empty() {
        format!(" {} ", entry.name)
    } else {
        format!(" {} {} ", entry.icon, entry.name)
    };
    let (name_style, description_style) = if selected {
        (theme.selected_style(), theme.selected_style())
    } else {
        (theme.normal_style(), theme.description_style())
    };
    two_columns(
        Span::styled(name, name_style),
        Span::styled(format!(" {} ", entry.description), description_style),
    )
}

fn legend(bindings: &[(&str, &str)], theme: &AppTheme) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, (key, action)) in bindings.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" • ", theme.command_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.key_style()));
        spans.push(Span::styled(format!(": {}", action), theme.command_style()));
    }
    Line::from(spans)
}

/// Title, blank line, column header and rule above the entry rows.
const LIST_HEADER_LINES: usize = 4;

/// Rows `[start, end)` to draw so `selected` stays on screen.
///
/// The window only moves as far as needed to reach the selection.
fn visible_window(selected: usize, len: usize, capacity: usize) -> Range<usize> {
    let start = (selected + 1)
        .saturating_sub(capacity)
        .min(len.saturating_sub(capacity));
    start..(start + capacity).min(len)
}

fn list_body(
    title: &str,
    entries: &[LaunchableEntry],
    selected: usize,
    width: u16,
    room: Option<usize>,
    theme: &AppTheme,
) -> Vec<Line<'static>> {
    let mut lines = vec![header(title, theme), Line::default()];

    lines.push(two_columns(
        Span::styled(" Name ", theme.normal_style()),
        Span::styled(" Description ", theme.normal_style()),
    ));
    lines.push(Line::from(Span::styled(
        "─".repeat(width as usize),
        theme.description_style(),
    )));

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            " No entries configured",
            theme.description_style(),
        )));
        return lines;
    }

    // Always show at least the selected row, even on a tiny terminal
    let capacity = room.map_or(entries.len(), |room| {
        room.saturating_sub(LIST_HEADER_LINES).max(1)
    });
    let window = visible_window(selected, entries.len(), capacity);
    for (idx, entry) in entries
        .iter()
        .enumerate()
        .skip(window.start)
        .take(window.len())
    {
        lines.push(entry_row(entry, idx == selected, theme));
    }
    lines
}

fn labeled(label: &str, value: String, theme: &AppTheme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), theme.normal_style()),
        Span::styled(value, theme.command_style()),
    ])
}

fn achievement_row(achievement: &Achievement, theme: &AppTheme) -> Line<'static> {
    let (marker, style) = if achievement.unlocked {
        ("✓", theme.key_style())
    } else {
        ("✗", theme.description_style())
    };
    let mut spans = vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(achievement.name.clone(), theme.normal_style()),
        Span::styled(
            format!(" - {}", achievement.description),
            theme.description_style(),
        ),
    ];
    if let Some(date) = &achievement.unlock_date {
        spans.push(Span::styled(format!(" ({})", date), theme.description_style()));
    }
    Line::from(spans)
}

fn stats_body(session: &LauncherSession, theme: &AppTheme) -> Vec<Line<'static>> {
    let stats = &session.stats;
    let mut lines = vec![
        header("📊 Statistics", theme),
        Line::default(),
        labeled("Games Played", stats.games_played.to_string(), theme),
        labeled(
            "Total Time",
            format!("{} seconds", stats.total_time_seconds),
            theme,
        ),
        labeled("Achievements", stats.achievements_unlocked.to_string(), theme),
        labeled("Favorite Game", stats.favorite_game.clone(), theme),
    ];

    if !session.achievements.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Achievements",
            theme.normal_style(),
        )));
        lines.extend(
            session
                .achievements
                .iter()
                .map(|achievement| achievement_row(achievement, theme)),
        );
    }

    lines
}

fn options_body(theme: &AppTheme) -> Vec<Line<'static>> {
    vec![
        header("⚙️  Options", theme),
        Line::default(),
        Line::from(Span::styled(" [Coming Soon]", theme.description_style())),
    ]
}

fn credits_body(session: &LauncherSession, theme: &AppTheme) -> Vec<Line<'static>> {
    vec![
        header("👨‍💻 Credits", theme),
        Line::default(),
        Line::from(Span::styled(
            format!(" {}", session.title),
            theme.normal_style(),
        )),
        Line::from(Span::styled(
            " Developed with love",
            theme.description_style(),
        )),
    ]
}
