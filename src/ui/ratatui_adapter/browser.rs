//! Ratatui collection browser
//!
//! Draws the shared [`UiState`] every tick and turns key presses into view
//! actions. Fetches run on detached worker threads so the interface stays
//! responsive; each one publishes straight into the shared state and the
//! next frame picks the change up.

use super::events::{EventResult, Extent, poll_and_handle};
use super::state::{AppState, FocusPane, Mode};
use super::theme::Theme;
use super::widgets::{BROWSER_HINTS, FeaturePane, HelpBar, HelpOverlay, ResultListPane, StatusBar};
use crate::api::{CollectionApi, SearchResponse};
use crate::state::{SharedState, StateHandle, UiState};
use crate::ui::error::{Result, UiError};
use crate::ui::output::OutputWriter;
use crate::view::{FeatureDetail, FeatureView, ResultList, SearchTrigger};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Margin},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Redraw interval while no key is pressed
const TICK: Duration = Duration::from_millis(100);

/// What the browser fetches on startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialQuery {
    /// Records whose `term` matches `value`
    TermValue { term: String, value: String },
    /// A page URL, as found in a response's `info.next`
    Url(String),
}

/// Terminal front end over a [`CollectionApi`] and a [`SharedState`]
pub struct RatatuiBrowser {
    api: Arc<dyn CollectionApi>,
    state: Arc<SharedState>,
    diagnostics: Arc<dyn OutputWriter>,
    theme: Theme,
    clipboard: Option<arboard::Clipboard>,
}

impl RatatuiBrowser {
    #[must_use]
    pub fn new(
        api: Arc<dyn CollectionApi>,
        state: Arc<SharedState>,
        diagnostics: Arc<dyn OutputWriter>,
    ) -> Self {
        Self {
            api,
            state,
            diagnostics,
            theme: Theme::default(),
            clipboard: None,
        }
    }

    /// Set custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, drawn to, or read
    /// from. Fetch failures are not errors; they go to the diagnostic sink.
    pub fn run(&mut self, initial: InitialQuery) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, initial);
        prefer_loop_result(result, Self::cleanup_terminal())
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        initial: InitialQuery,
    ) -> Result<()> {
        let mut app = AppState::new();
        self.start(initial)?;

        let mut shown: Option<SearchResponse> = None;

        while !app.should_exit {
            let snapshot = self.state.snapshot();
            let feature = FeatureDetail::project(snapshot.featured_result.as_ref());

            if shown.as_ref() != Some(&snapshot.search_results) {
                app.reset_results();
                shown = Some(snapshot.search_results.clone());
            }

            let extent = Extent {
                results: snapshot.search_results.records.len(),
                triggers: trigger_count(&feature),
            };
            app.clamp(extent.results, extent.triggers);
            app.status.prune();

            terminal.draw(|frame| self.render(frame, &mut app, &snapshot, &feature))?;

            match poll_and_handle(&mut app, extent, TICK)? {
                EventResult::Quit => app.should_exit = true,
                action => {
                    // worker threads are detached; a newer fetch simply overwrites
                    let _ = self.dispatch(&mut app, &snapshot, &feature, action);
                }
            }

            app.tick = app.tick.wrapping_add(1);
        }

        Ok(())
    }

    /// Kick off the startup fetch
    fn start(&self, initial: InitialQuery) -> Result<JoinHandle<()>> {
        tracing::info!(?initial, "starting browser");
        match initial {
            InitialQuery::TermValue { term, value } => {
                let trigger = SearchTrigger::new(term, value);
                self.spawn_fetch(move |api, state, diagnostics| {
                    trigger.activate(api, state, diagnostics);
                })
            }
            InitialQuery::Url(url) => self.spawn_fetch(move |api, state, diagnostics| {
                ResultList::fetch_page(&url, api, state, diagnostics);
            }),
        }
    }

    /// Perform the action behind an event
    ///
    /// Returns the worker handle when the action started a fetch.
    pub(crate) fn dispatch(
        &mut self,
        app: &mut AppState,
        snapshot: &UiState,
        feature: &FeatureView,
        action: EventResult,
    ) -> Option<JoinHandle<()>> {
        let spawned = match action {
            EventResult::Feature(index) => {
                if let Some(record) = snapshot.search_results.records.get(index) {
                    ResultList::select(record, self.state.as_ref());
                    app.reset_feature();
                    app.focus = FocusPane::Feature;
                }
                return None;
            }
            EventResult::Page(direction) => {
                let control = ResultList::new(&snapshot.search_results).control(direction);
                let Some(url) = control.url.map(str::to_string) else {
                    return None;
                };
                self.spawn_fetch(move |api, state, diagnostics| {
                    ResultList::fetch_page(&url, api, state, diagnostics);
                })
            }
            EventResult::Search(index) => {
                let FeatureView::Object(object) = feature else {
                    return None;
                };
                let trigger = object.triggers().nth(index).cloned()?;
                app.focus = FocusPane::Results;
                self.spawn_fetch(move |api, state, diagnostics| {
                    trigger.activate(api, state, diagnostics);
                })
            }
            EventResult::OpenLink => {
                Self::open_link(app, snapshot);
                return None;
            }
            EventResult::CopyImageUrl => {
                self.copy_image_url(app, snapshot);
                return None;
            }
            EventResult::Continue | EventResult::Ignored | EventResult::Quit => return None,
        };

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!(error = %e, "could not start fetch");
                app.status.error(&e.to_string());
                None
            }
        }
    }

    fn spawn_fetch<F>(&self, job: F) -> Result<JoinHandle<()>>
    where
        F: FnOnce(&dyn CollectionApi, &dyn StateHandle, &dyn OutputWriter) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let diagnostics = Arc::clone(&self.diagnostics);

        thread::Builder::new()
            .name("curio-fetch".to_string())
            .spawn(move || job(api.as_ref(), state.as_ref(), diagnostics.as_ref()))
            .map_err(|e| UiError::SpawnError(e.to_string()))
    }

    /// Open the featured record's page, or its image when it has no page
    fn open_link(app: &AppState, snapshot: &UiState) {
        let Some(record) = snapshot.featured_result.as_ref() else {
            app.status.warning("Nothing featured");
            return;
        };

        let target = crate::api::types::non_empty(record.url.as_deref()).or_else(|| record.primary_image());
        let Some(target) = target else {
            app.status.warning("Record has no link");
            return;
        };

        match open::that(target) {
            Ok(()) => app.status.success(&format!("Opened {target}")),
            Err(e) => {
                tracing::warn!(error = %e, url = target, "failed to open link");
                app.status.error(&format!("Failed to open link: {e}"));
            }
        }
    }

    fn copy_image_url(&mut self, app: &AppState, snapshot: &UiState) {
        let Some(url) = snapshot
            .featured_result
            .as_ref()
            .and_then(crate::api::Record::primary_image)
        else {
            app.status.warning("No image to copy");
            return;
        };

        match self.set_clipboard(url) {
            Ok(()) => app.status.success("Image URL copied"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                app.status.error(&e.to_string());
            }
        }
    }

    /// Write to the system clipboard
    ///
    /// The handle is kept for the life of the browser: on X11 the copied
    /// text is only served while it exists.
    fn set_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| UiError::ClipboardError(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| UiError::ClipboardError(e.to_string())),
            None => Err(UiError::ClipboardError("clipboard not initialised".to_string())),
        }
    }

    fn render(&self, frame: &mut Frame, app: &mut AppState, snapshot: &UiState, feature: &FeatureView) {
        let [content, status, help] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [results_area, feature_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(content);

        app.visible_height = ResultListPane::rows_for_height(results_area.height);
        app.clamp(snapshot.search_results.records.len(), trigger_count(feature));

        let results = ResultListPane::new(ResultList::new(&snapshot.search_results), app, &self.theme)
            .focused(app.focus == FocusPane::Results);
        frame.render_widget(results, results_area);

        let feature_inner = feature_area.inner(Margin::new(1, 1));
        let span = FeaturePane::new(feature, app, &self.theme).trigger_span(feature_inner.width);
        if let Some((start, end)) = span {
            app.follow_trigger(start, end, usize::from(feature_inner.height));
        }

        let feature_pane =
            FeaturePane::new(feature, app, &self.theme).focused(app.focus == FocusPane::Feature);
        frame.render_widget(feature_pane, feature_area);

        let message = app.status.latest();
        let status_bar = StatusBar::new(&snapshot.search_results.info, snapshot.is_loading, &self.theme)
            .with_tick(app.tick)
            .with_message(message.as_ref());
        frame.render_widget(status_bar, status);

        frame.render_widget(HelpBar::new(BROWSER_HINTS, &self.theme), help);

        if app.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(&self.theme), frame.area());
        }
    }
}

/// The loop's outcome wins over a cleanup failure, which is only logged
fn prefer_loop_result(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    if let Err(e) = cleanup {
        tracing::warn!(error = %e, "terminal cleanup failed");
    }
    result
}

fn trigger_count(feature: &FeatureView) -> usize {
    match feature {
        FeatureView::Object(object) => object.triggers().count(),
        FeatureView::Empty => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PageInfo;
    use crate::testing::{ApiCall, RecordingWriter, StubApi, full_record, titled};
    use crate::view::PageDirection;

    fn browser(api: StubApi) -> (RatatuiBrowser, Arc<StubApi>, Arc<SharedState>) {
        let api = Arc::new(api);
        let state = Arc::new(SharedState::new());
        let browser = RatatuiBrowser::new(
            Arc::clone(&api) as Arc<dyn CollectionApi>,
            Arc::clone(&state),
            Arc::new(RecordingWriter::default()),
        );
        (browser, api, state)
    }

    fn page_with_next() -> SearchResponse {
        SearchResponse::new(
            PageInfo {
                next: Some("https://api/object?page=2".into()),
                ..PageInfo::default()
            },
            vec![titled("Vase"), titled("Bowl")],
        )
    }

    fn dispatch(
        browser: &mut RatatuiBrowser,
        app: &mut AppState,
        state: &SharedState,
        action: EventResult,
    ) -> Option<JoinHandle<()>> {
        let snapshot = state.snapshot();
        let feature = FeatureDetail::project(snapshot.featured_result.as_ref());
        browser.dispatch(app, &snapshot, &feature, action)
    }

    #[test]
    fn test_start_with_term_value() {
        let (browser, api, state) = browser(StubApi::returning(page_with_next()));
        let initial = InitialQuery::TermValue {
            term: "hasimage".into(),
            value: "1".into(),
        };

        browser.start(initial).unwrap().join().unwrap();

        assert_eq!(
            api.calls(),
            vec![ApiCall::TermValue("hasimage".into(), "1".into())]
        );
        let snapshot = state.snapshot();
        assert_eq!(snapshot.search_results, page_with_next());
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn test_feature_is_local() {
        let (mut browser, api, state) = browser(StubApi::returning(page_with_next()));
        state.set_search_results(page_with_next());
        let mut app = AppState::new();
        app.feature_scroll = 7;

        let handle = dispatch(&mut browser, &mut app, &state, EventResult::Feature(1));

        assert!(handle.is_none());
        assert!(api.calls().is_empty());
        assert_eq!(state.snapshot().featured_result, Some(titled("Bowl")));
        assert_eq!(app.focus, FocusPane::Feature);
        assert_eq!(app.feature_scroll, 0);
    }

    #[test]
    fn test_next_page_fetches_url() {
        let (mut browser, api, state) = browser(StubApi::returning(SearchResponse::default()));
        state.set_search_results(page_with_next());
        let mut app = AppState::new();

        dispatch(&mut browser, &mut app, &state, EventResult::Page(PageDirection::Next))
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(api.calls(), vec![ApiCall::Url("https://api/object?page=2".into())]);
        assert!(state.snapshot().search_results.records.is_empty());
    }

    #[test]
    fn test_disabled_page_does_nothing() {
        let (mut browser, api, state) = browser(StubApi::returning(SearchResponse::default()));
        state.set_search_results(page_with_next());
        let mut app = AppState::new();

        let handle = dispatch(
            &mut browser,
            &mut app,
            &state,
            EventResult::Page(PageDirection::Previous),
        );

        assert!(handle.is_none());
        assert!(api.calls().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_search_trigger_runs_in_worker() {
        let (mut browser, api, state) = browser(StubApi::returning(page_with_next()));
        state.set_featured_result(Some(full_record()));
        let mut app = AppState::new();
        app.focus = FocusPane::Feature;

        dispatch(&mut browser, &mut app, &state, EventResult::Search(0))
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(
            api.calls(),
            vec![ApiCall::TermValue("culture".into(), "Greek".into())]
        );
        let snapshot = state.snapshot();
        assert_eq!(snapshot.search_results, page_with_next());
        assert_eq!(snapshot.featured_result, Some(full_record()));
        assert_eq!(app.focus, FocusPane::Results);
    }

    #[test]
    fn test_failed_fetch_clears_loading() {
        let (mut browser, _api, state) = browser(StubApi::failing("boom"));
        state.set_featured_result(Some(full_record()));
        let mut app = AppState::new();

        dispatch(&mut browser, &mut app, &state, EventResult::Search(0))
            .unwrap()
            .join()
            .unwrap();

        assert!(!state.is_loading());
        assert!(state.snapshot().search_results.records.is_empty());
    }

    #[test]
    fn test_cleanup_failure_keeps_loop_error() {
        let result = prefer_loop_result(
            Err(UiError::SpawnError("loop".into())),
            Err(UiError::ClipboardError("cleanup".into())),
        );
        assert!(matches!(result, Err(UiError::SpawnError(message)) if message == "loop"));

        let result = prefer_loop_result(Ok(()), Err(UiError::ClipboardError("cleanup".into())));
        assert!(result.is_ok());
    }

    #[test]
    fn test_open_link_without_feature_warns() {
        let (mut browser, _api, state) = browser(StubApi::returning(SearchResponse::default()));
        let mut app = AppState::new();

        dispatch(&mut browser, &mut app, &state, EventResult::OpenLink);

        let message = app.status.latest().unwrap();
        assert_eq!(message.text, "Nothing featured");
    }
}
