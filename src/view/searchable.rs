//! Activatable label that re-runs the search for a term/value pair

use super::fetch::run_fetch;
use crate::api::CollectionApi;
use crate::state::StateHandle;
use crate::ui::output::OutputWriter;

/// A fact value that, when activated, searches for records sharing it
///
/// Activation replaces the current result set; the featured record is left
/// as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrigger {
    search_term: String,
    search_value: String,
}

impl SearchTrigger {
    #[must_use]
    pub fn new(search_term: impl Into<String>, search_value: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            search_value: search_value.into(),
        }
    }

    /// API field the search filters on (e.g. `culture`)
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Value to match, also the label shown to the user
    #[must_use]
    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    /// Text rendered for the trigger
    #[must_use]
    pub fn label(&self) -> &str {
        &self.search_value
    }

    /// Run the term/value search and publish its results
    ///
    /// Failures are reported to `diagnostics` and never escape.
    pub fn activate(
        &self,
        api: &dyn CollectionApi,
        state: &dyn StateHandle,
        diagnostics: &dyn OutputWriter,
    ) {
        tracing::debug!(term = %self.search_term, value = %self.search_value, "search trigger activated");
        run_fetch(state, diagnostics, || {
            api.fetch_by_term_and_value(&self.search_term, &self.search_value)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PageInfo, SearchResponse};
    use crate::testing::{ApiCall, RecordingState, RecordingWriter, StubApi, titled};

    fn roman_page() -> SearchResponse {
        SearchResponse::new(
            PageInfo {
                next: Some("https://api/object?page=2".into()),
                ..PageInfo::default()
            },
            vec![titled("Coin"), titled("Lamp")],
        )
    }

    #[test]
    fn test_label_is_search_value() {
        let trigger = SearchTrigger::new("culture", "Roman");
        assert_eq!(trigger.label(), "Roman");
        assert_eq!(trigger.search_term(), "culture");
    }

    #[test]
    fn test_successful_activation() {
        let api = StubApi::returning(roman_page());
        let state = RecordingState::new();
        let sink = RecordingWriter::new();

        SearchTrigger::new("culture", "Roman").activate(&api, &state, &sink);

        assert_eq!(
            api.calls(),
            vec![ApiCall::TermValue("culture".into(), "Roman".into())]
        );
        assert_eq!(state.loading_calls(), vec![true, false]);
        assert_eq!(state.results_calls(), vec![roman_page()]);
        assert!(state.featured_calls().is_empty());
        assert!(sink.errors().is_empty());
    }

    #[test]
    fn test_failing_activation() {
        let api = StubApi::failing("connection reset");
        let state = RecordingState::new();
        let sink = RecordingWriter::new();

        SearchTrigger::new("person", "A, B").activate(&api, &state, &sink);

        assert_eq!(api.calls(), vec![ApiCall::TermValue("person".into(), "A, B".into())]);
        assert!(state.results_calls().is_empty());
        assert_eq!(state.loading_calls(), vec![true, false]);
        assert_eq!(sink.errors().len(), 1);
    }
}
