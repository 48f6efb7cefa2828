//! Status bar widget: loading indicator, page position, and messages

use crate::api::PageInfo;
use crate::output::page_summary;
use crate::ui::output::{MessageLevel, StatusMessage};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Status bar widget
pub struct StatusBar<'a> {
    info: &'a PageInfo,
    loading: bool,
    tick: usize,
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(info: &'a PageInfo, loading: bool, theme: &'a Theme) -> Self {
        Self {
            info,
            loading,
            tick: 0,
            message: None,
            theme,
        }
    }

    /// Frame counter for the spinner
    #[must_use]
    pub const fn with_tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: Option<&'a StatusMessage>) -> Self {
        self.message = message;
        self
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }

    fn left_line(&self) -> Line<'a> {
        if self.loading {
            let frame = SPINNER[self.tick % SPINNER.len()];
            return Line::styled(format!("{frame} Loading…"), self.theme.info_style());
        }

        match self.message {
            Some(msg) => {
                let style = self.style_for_level(msg.level);
                Line::from(vec![
                    Span::styled(Self::prefix_for_level(msg.level), style),
                    Span::styled(msg.text.as_str(), style),
                ])
            }
            None => Line::default(),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(inner);

        Paragraph::new(self.left_line()).render(left, buf);

        if let Some(summary) = page_summary(self.info) {
            Paragraph::new(Line::styled(summary, self.theme.dimmed_style()).right_aligned())
                .render(right, buf);
        }
    }
}
