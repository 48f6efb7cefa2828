//! Pane state for the ratatui browser
//!
//! Cursor positions, focus, and mode. The shared search state lives in
//! [`SharedState`](crate::state::SharedState); this struct only tracks what
//! the terminal front end needs to draw and navigate it.

use crate::ui::output::StatusLog;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    #[default]
    Results,
    Feature,
}

impl FocusPane {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Results => Self::Feature,
            Self::Feature => Self::Results,
        }
    }
}

/// Terminal-side state of the browser
#[derive(Debug, Default)]
pub struct AppState {
    pub mode: Mode,
    pub focus: FocusPane,
    /// Cursor in the result list
    pub result_cursor: usize,
    /// First visible result row
    pub result_scroll: usize,
    /// Cursor over the searchable facts of the featured record
    pub trigger_cursor: usize,
    /// First visible row of the feature pane
    pub feature_scroll: usize,
    /// Number of result rows that fit (set during render)
    pub visible_height: usize,
    /// Frame counter driving the loading spinner
    pub tick: usize,
    pub should_exit: bool,
    /// Feedback for link and clipboard actions
    pub status: StatusLog,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep cursors inside the current data
    ///
    /// Called every frame because a background fetch may replace the
    /// result page between two key presses.
    pub fn clamp(&mut self, result_count: usize, trigger_count: usize) {
        self.result_cursor = self.result_cursor.min(result_count.saturating_sub(1));
        self.trigger_cursor = self.trigger_cursor.min(trigger_count.saturating_sub(1));
        self.adjust_scroll();
    }

    pub fn cursor_up(&mut self) {
        match self.focus {
            FocusPane::Results => self.result_cursor = self.result_cursor.saturating_sub(1),
            FocusPane::Feature => self.trigger_cursor = self.trigger_cursor.saturating_sub(1),
        }
        self.adjust_scroll();
    }

    pub fn cursor_down(&mut self, result_count: usize, trigger_count: usize) {
        match self.focus {
            FocusPane::Results => {
                if self.result_cursor + 1 < result_count {
                    self.result_cursor += 1;
                }
            }
            FocusPane::Feature => {
                if self.trigger_cursor + 1 < trigger_count {
                    self.trigger_cursor += 1;
                }
            }
        }
        self.adjust_scroll();
    }

    pub fn jump_to_start(&mut self) {
        self.result_cursor = 0;
        self.adjust_scroll();
    }

    pub fn jump_to_end(&mut self, result_count: usize) {
        self.result_cursor = result_count.saturating_sub(1);
        self.adjust_scroll();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// Reset cursors after a new result page arrives
    pub fn reset_results(&mut self) {
        self.result_cursor = 0;
        self.result_scroll = 0;
    }

    /// Scroll the feature pane so rows `start..end` are visible in `height` rows
    ///
    /// When the span is taller than the pane its first row wins.
    pub fn follow_trigger(&mut self, start: usize, end: usize, height: usize) {
        let height = height.max(1);
        if start < self.feature_scroll {
            self.feature_scroll = start;
        } else if end > self.feature_scroll + height {
            self.feature_scroll = start.min(end - height);
        }
    }

    /// Show a newly featured record from its top
    pub fn reset_feature(&mut self) {
        self.trigger_cursor = 0;
        self.feature_scroll = 0;
    }

    fn adjust_scroll(&mut self) {
        let height = self.visible_height.max(1);
        if self.result_cursor < self.result_scroll {
            self.result_scroll = self.result_cursor;
        } else if self.result_cursor >= self.result_scroll + height {
            self.result_scroll = self.result_cursor + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut state = AppState::new();
        state.visible_height = 10;

        state.cursor_up();
        assert_eq!(state.result_cursor, 0);

        for _ in 0..20 {
            state.cursor_down(5, 0);
        }
        assert_eq!(state.result_cursor, 4);
    }

    #[test]
    fn test_focus_routes_cursor() {
        let mut state = AppState::new();
        state.toggle_focus();
        assert_eq!(state.focus, FocusPane::Feature);

        state.cursor_down(5, 3);
        state.cursor_down(5, 3);
        state.cursor_down(5, 3);
        assert_eq!(state.trigger_cursor, 2);
        assert_eq!(state.result_cursor, 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = AppState::new();
        state.visible_height = 3;

        for _ in 0..5 {
            state.cursor_down(10, 0);
        }
        assert_eq!(state.result_cursor, 5);
        assert_eq!(state.result_scroll, 3);

        state.jump_to_start();
        assert_eq!(state.result_scroll, 0);
    }

    #[test]
    fn test_clamp_after_page_shrinks() {
        let mut state = AppState::new();
        state.visible_height = 10;
        state.result_cursor = 8;
        state.trigger_cursor = 3;

        state.clamp(2, 0);
        assert_eq!(state.result_cursor, 1);
        assert_eq!(state.trigger_cursor, 0);
    }

    #[test]
    fn test_follow_trigger_scrolls_both_ways() {
        let mut state = AppState::new();

        state.follow_trigger(2, 3, 10);
        assert_eq!(state.feature_scroll, 0);

        state.follow_trigger(25, 26, 10);
        assert_eq!(state.feature_scroll, 16);

        state.follow_trigger(20, 21, 10);
        assert_eq!(state.feature_scroll, 16);

        state.follow_trigger(12, 13, 10);
        assert_eq!(state.feature_scroll, 12);

        // a span taller than the pane shows its start
        state.follow_trigger(30, 50, 10);
        assert_eq!(state.feature_scroll, 30);

        state.reset_feature();
        assert_eq!(state.feature_scroll, 0);
        assert_eq!(state.trigger_cursor, 0);
    }
}
