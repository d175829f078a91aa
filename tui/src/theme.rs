//! Styles for the todo list screen.

use ratatui::style::{Color, Modifier, Style};

/// Style set used across the whole UI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub row: Style,
    /// Rows carrying the completed marker.
    pub row_done: Style,
    pub row_selected: Style,
    pub entry_active: Style,
    pub entry_inactive: Style,
    pub footer: Style,
    /// Footer hint for a disabled action (clear-all on an empty list).
    pub footer_disabled: Style,
    pub status_error: Style,
    pub modal_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            row: Style::default(),
            row_done: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            row_selected: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            entry_active: Style::default().fg(Color::Cyan),
            entry_inactive: Style::default().fg(Color::DarkGray),
            footer: Style::default().fg(Color::DarkGray),
            footer_disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            status_error: Style::default().fg(Color::Red),
            modal_border: Style::default().fg(Color::Yellow),
        }
    }
}
