use ratatui::style::{Color, Modifier, Style};

use wflib_core::catalog::Tint;

/// Styles shared by every screen
pub struct Theme {
    pub selected: Style,
    pub focused: Style,
    pub title: Style,
    pub success: Style,
    pub error: Style,
    pub muted: Style,
    pub highlight: Style,
    pub code: Style,
    color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            error: Style::default().fg(Color::Red),
            muted: Style::default().fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(Color::Gray),
            color: true,
        }
    }
}

impl Theme {
    /// Bold and reverse only, for terminals where color is turned off
    pub fn monochrome() -> Self {
        let plain = Style::default();
        Self {
            selected: plain.add_modifier(Modifier::REVERSED),
            focused: plain.add_modifier(Modifier::BOLD),
            title: plain.add_modifier(Modifier::BOLD),
            success: plain.add_modifier(Modifier::BOLD),
            error: plain.add_modifier(Modifier::BOLD),
            muted: plain,
            highlight: plain.add_modifier(Modifier::BOLD),
            code: plain,
            color: false,
        }
    }

    pub fn for_config(color: bool) -> Self {
        if color {
            Self::default()
        } else {
            Self::monochrome()
        }
    }

    /// Foreground for a language dot or action icon
    pub fn tint(&self, tint: Tint) -> Style {
        if !self.color {
            return Style::default();
        }
        let color = match tint {
            Tint::Green => Color::Green,
            Tint::Blue => Color::Blue,
            Tint::Red => Color::Red,
            Tint::Purple => Color::Magenta,
            Tint::Orange => Color::Rgb(255, 165, 0),
            Tint::Teal => Color::Rgb(0, 128, 128),
            Tint::Yellow => Color::Yellow,
            Tint::Cyan => Color::Cyan,
            Tint::Gray => Color::Gray,
        };
        Style::default().fg(color)
    }
}
