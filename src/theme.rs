//! Built-in color themes.
//!
//! The config's `settings.theme` picks one by name. Unknown names fall back
//! to `retro`.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: &'static str,
    pub header_fg: Color,
    pub header_bg: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Legend descriptions ("launch", "quit")
    pub command: Color,
    /// Legend key names ("enter", "q")
    pub key: Color,
    /// Reverse video instead of a background color for selected rows
    pub reverse_selection: bool,
}

impl AppTheme {
    /// Purple banner, green keys.
    pub fn retro() -> Self {
        Self {
            name: "retro",
            header_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            header_bg: Color::Rgb(0x7C, 0x3A, 0xED),
            selected_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            selected_bg: Color::Rgb(0x7C, 0x3A, 0xED),
            text_primary: Color::Rgb(0xFF, 0xFF, 0xFF),
            text_secondary: Color::Rgb(0x9C, 0xA3, 0xAF),
            command: Color::Rgb(0x60, 0xA5, 0xFA),
            key: Color::Rgb(0x34, 0xD3, 0x99),
            reverse_selection: false,
        }
    }

    /// For terminals without color support.
    pub fn mono() -> Self {
        Self {
            name: "mono",
            header_fg: Color::Reset,
            header_bg: Color::Reset,
            selected_fg: Color::Reset,
            selected_bg: Color::Reset,
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            command: Color::Reset,
            key: Color::Reset,
            reverse_selection: true,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "retro" | "" => Self::retro(),
            "mono" | "monochrome" => Self::mono(),
            other => {
                tracing::warn!(theme = other, "Unknown theme, using retro");
                Self::retro()
            }
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        let style = Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD);
        if self.reverse_selection {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn description_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn command_style(&self) -> Style {
        Style::default()
            .fg(self.command)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_style(&self) -> Style {
        Style::default().fg(self.key).add_modifier(Modifier::BOLD)
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::retro()
    }
}
