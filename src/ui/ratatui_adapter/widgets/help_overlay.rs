//! Help overlay widget for displaying the full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Sections of the help screen: heading, then (keys, description) rows
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Results",
        &[
            ("↑/↓  j/k", "Move cursor"),
            ("Home/End", "Jump to first/last record"),
            ("Enter", "Show record in the feature pane"),
            ("←/→  p/n", "Previous/next page"),
        ],
    ),
    (
        "Feature",
        &[
            ("↑/↓  j/k", "Move between searchable facts"),
            ("Enter", "Search for records sharing the value"),
            ("o", "Open record (or image) in browser"),
            ("y", "Copy image URL"),
        ],
    ),
    (
        "General",
        &[
            ("Tab", "Switch pane"),
            ("?  F1", "Toggle this help"),
            ("q  Esc", "Quit"),
        ],
    ),
];

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (heading, rows) in SECTIONS {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("  {heading}"),
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::default());
            for (keys, description) in *rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<12}"), self.theme.cursor_style()),
                    Span::raw(*description),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
        ));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
