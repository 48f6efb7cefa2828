//! Feature pane: header, facts, and photos of the featured record

use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::{FactContent, FeatureView, ObjectFeature};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget drawing a [`FeatureView`]
pub struct FeaturePane<'a> {
    view: &'a FeatureView,
    state: &'a AppState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> FeaturePane<'a> {
    #[must_use]
    pub const fn new(view: &'a FeatureView, state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            view,
            state,
            theme,
            focused: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Wrapped rows the trigger under the cursor needs on screen at `width`
    ///
    /// Returns `start..end` rows of the pane content. For the last trigger the
    /// span runs to the end of the content so the photos come into view with
    /// it. `None` when the featured record has nothing to search.
    #[must_use]
    pub fn trigger_span(&self, width: u16) -> Option<(usize, usize)> {
        let FeatureView::Object(object) = self.view else {
            return None;
        };
        let (lines, trigger_line) = self.build_lines(object);
        let index = trigger_line?;

        let rows = |lines: &[Line<'a>]| {
            Paragraph::new(lines.to_vec())
                .wrap(Wrap { trim: false })
                .line_count(width)
        };
        let start = rows(&lines[..index]);
        let end = if self.state.trigger_cursor + 1 >= object.triggers().count() {
            rows(&lines)
        } else {
            start + rows(&lines[index..=index])
        };
        Some((start, end))
    }

    fn build_lines(&self, object: &'a ObjectFeature) -> (Vec<Line<'a>>, Option<usize>) {
        let mut lines = vec![
            Line::styled(object.title.as_str(), self.theme.heading_style()),
            Line::styled(object.dated.as_str(), self.theme.dimmed_style()),
        ];

        if !object.facts.is_empty() {
            lines.push(Line::default());
        }

        let width = object.facts.iter().map(|f| f.title.len()).max().unwrap_or_default();
        let mut trigger_index = 0;
        let mut trigger_line = None;

        for fact in &object.facts {
            let title = Span::styled(format!("{:<width$}  ", fact.title), self.theme.dimmed_style());
            let content = match &fact.content {
                FactContent::Text(text) => Span::raw(text.as_str()),
                FactContent::Search(trigger) => {
                    let mut style = self.theme.searchable_style();
                    if trigger_index == self.state.trigger_cursor {
                        trigger_line = Some(lines.len());
                        if self.focused {
                            style = self.theme.selected_style().add_modifier(Modifier::UNDERLINED);
                        }
                    }
                    trigger_index += 1;
                    Span::styled(trigger.label(), style)
                }
            };
            lines.push(Line::from(vec![title, content]));
        }

        if let Some(photos) = &object.photos {
            lines.push(Line::default());
            lines.push(Line::styled("Photos", self.theme.heading_style()));
            for photo in photos {
                let mut spans = vec![
                    Span::styled("▣ ", self.theme.dimmed_style()),
                    Span::raw(photo.src.as_str()),
                ];
                if let Some(alt) = photo.alt.as_deref().filter(|alt| !alt.is_empty()) {
                    spans.push(Span::styled(format!("  {alt}"), self.theme.dimmed_style()));
                }
                lines.push(Line::from(spans));
            }
        }

        (lines, trigger_line)
    }
}

impl Widget for FeaturePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Feature ");

        match self.view {
            FeatureView::Empty => block.render(area, buf),
            FeatureView::Object(object) => {
                let (lines, _) = self.build_lines(object);
                let scroll = u16::try_from(self.state.feature_scroll).unwrap_or(u16::MAX);
                Paragraph::new(lines)
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0))
                    .render(area, buf);
            }
        }
    }
}
