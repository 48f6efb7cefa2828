//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the row under the cursor
    pub selection_bg: Color,
    /// Foreground color for the row under the cursor
    pub selection_fg: Color,
    /// Color for the cursor indicator and key names
    pub cursor: Color,
    /// Color for record titles
    pub heading: Color,
    /// Color for searchable fact values
    pub searchable: Color,
    /// Color for the "MISSING INFO" placeholder
    pub missing: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages and the loading indicator
    pub info: Color,
    /// Color for borders of unfocused panes
    pub border: Color,
    /// Color for the border of the focused pane
    pub focused_border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            heading: Color::White,
            searchable: Color::Magenta,
            missing: Color::Red,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            focused_border: Color::Cyan,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the row under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>) and key names
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for searchable values (rendered like links)
    #[must_use]
    pub fn searchable_style(&self) -> Style {
        Style::default()
            .fg(self.searchable)
            .add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn missing_style(&self) -> Style {
        Style::default()
            .fg(self.missing)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for an enabled pagination control
    #[must_use]
    pub fn control_style(&self) -> Style {
        self.cursor_style()
    }

    /// Style for a disabled pagination control
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::DIM)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.focused_border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
