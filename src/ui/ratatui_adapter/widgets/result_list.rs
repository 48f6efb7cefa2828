//! Result list pane: pagination controls plus one row per record

use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::{PageControl, ResultEntry, ResultList};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Widget drawing a [`ResultList`]
pub struct ResultListPane<'a> {
    list: ResultList<'a>,
    state: &'a AppState,
    theme: &'a Theme,
    focused: bool,
    title: String,
}

impl<'a> ResultListPane<'a> {
    #[must_use]
    pub fn new(list: ResultList<'a>, state: &'a AppState, theme: &'a Theme) -> Self {
        let title = format!(" Results ({}) ", list.len());
        Self {
            list,
            state,
            theme,
            focused: false,
            title,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows available for records inside a pane of the given height
    #[must_use]
    pub const fn rows_for_height(height: u16) -> usize {
        // two border rows plus the pagination row
        height.saturating_sub(3) as usize
    }

    fn control_span(&self, control: &PageControl<'_>, text: &'static str) -> Span<'static> {
        let style = if control.is_disabled() {
            self.theme.disabled_style()
        } else {
            self.theme.control_style()
        };
        Span::styled(text, style)
    }

    fn pagination_line(&self) -> Line<'static> {
        Line::from(vec![
            self.control_span(&self.list.previous(), "◀ Previous"),
            Span::raw("   "),
            self.control_span(&self.list.next(), "Next ▶"),
        ])
    }

    fn render_entry(&self, entry: &ResultEntry<'a>, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let image_char = if entry.image.is_some() { "▣" } else { " " };

        let heading_style = if entry.record.title_text().is_none() {
            self.theme.missing_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(image_char, self.theme.dimmed_style()),
            Span::raw(" "),
            Span::styled(entry.heading, heading_style),
        ];

        if let Some(dated) = entry.record.dated.as_deref().filter(|d| !d.is_empty()) {
            spans.push(Span::styled(format!("  {dated}"), self.theme.dimmed_style()));
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor && self.focused {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }
}

impl Widget for ResultListPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style: Style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let [header_area, rows_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        Paragraph::new(self.pagination_line()).render(header_area, buf);

        if self.list.is_empty() {
            Paragraph::new(Line::styled("No records", self.theme.dimmed_style()))
                .render(rows_area, buf);
            return;
        }

        let visible = rows_area.height as usize;
        let items: Vec<ListItem> = self
            .list
            .entries()
            .iter()
            .skip(self.state.result_scroll)
            .take(visible)
            .map(|entry| self.render_entry(entry, entry.index == self.state.result_cursor))
            .collect();

        List::new(items).render(rows_area, buf);
    }
}
