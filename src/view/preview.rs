//! Result list: the current page of records plus pagination controls

use super::fetch::run_fetch;
use crate::api::{CollectionApi, Record, SearchResponse};
use crate::state::StateHandle;
use crate::ui::output::OutputWriter;

/// Heading shown for records without a title
pub const MISSING_INFO: &str = "MISSING INFO";

/// Which pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

impl PageDirection {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
        }
    }
}

/// A pagination button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl<'a> {
    pub direction: PageDirection,
    pub url: Option<&'a str>,
}

impl PageControl<'_> {
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.url.is_none()
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.direction.label()
    }
}

/// Thumbnail for a result entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    pub src: &'a str,
    pub alt: Option<&'a str>,
}

/// One record row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultEntry<'a> {
    pub index: usize,
    pub record: &'a Record,
    pub image: Option<Thumbnail<'a>>,
    pub heading: &'a str,
}

/// Borrowed view over a result page
#[derive(Debug, Clone, Copy)]
pub struct ResultList<'a> {
    results: &'a SearchResponse,
}

impl<'a> ResultList<'a> {
    #[must_use]
    pub const fn new(results: &'a SearchResponse) -> Self {
        Self { results }
    }

    #[must_use]
    pub fn previous(&self) -> PageControl<'a> {
        PageControl {
            direction: PageDirection::Previous,
            url: self.results.info.prev_url(),
        }
    }

    #[must_use]
    pub fn next(&self) -> PageControl<'a> {
        PageControl {
            direction: PageDirection::Next,
            url: self.results.info.next_url(),
        }
    }

    #[must_use]
    pub fn control(&self, direction: PageDirection) -> PageControl<'a> {
        match direction {
            PageDirection::Previous => self.previous(),
            PageDirection::Next => self.next(),
        }
    }

    /// One entry per record, in API order
    #[must_use]
    pub fn entries(&self) -> Vec<ResultEntry<'a>> {
        self.results
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| ResultEntry {
                index,
                record,
                image: record.primary_image().map(|src| Thumbnail {
                    src,
                    alt: record.description.as_deref(),
                }),
                heading: record.title_text().unwrap_or(MISSING_INFO),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.records.is_empty()
    }

    /// Promote a record to the feature view
    ///
    /// Purely local: no request is made.
    pub fn select(record: &Record, state: &dyn StateHandle) {
        state.set_featured_result(Some(record.clone()));
    }

    /// Activate a pagination control
    ///
    /// A disabled control does nothing. Otherwise the page at its URL is
    /// fetched and replaces the current results.
    pub fn activate_page(
        control: PageControl<'_>,
        api: &dyn CollectionApi,
        state: &dyn StateHandle,
        diagnostics: &dyn OutputWriter,
    ) {
        if let Some(url) = control.url {
            Self::fetch_page(url, api, state, diagnostics);
        }
    }

    /// Fetch the page at `url` and publish it
    pub fn fetch_page(
        url: &str,
        api: &dyn CollectionApi,
        state: &dyn StateHandle,
        diagnostics: &dyn OutputWriter,
    ) {
        tracing::debug!(url, "page fetch");
        run_fetch(state, diagnostics, || api.fetch_by_url(url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PageInfo;
    use crate::testing::{ApiCall, RecordingState, RecordingWriter, StubApi, titled};

    fn page(prev: Option<&str>, next: Option<&str>, records: Vec<Record>) -> SearchResponse {
        SearchResponse::new(
            PageInfo {
                prev: prev.map(String::from),
                next: next.map(String::from),
                ..PageInfo::default()
            },
            records,
        )
    }

    #[test]
    fn test_controls_follow_page_info() {
        let results = page(None, Some("url2"), Vec::new());
        let list = ResultList::new(&results);

        assert!(list.previous().is_disabled());
        assert!(!list.next().is_disabled());
        assert_eq!(list.next().url, Some("url2"));
        assert_eq!(list.previous().label(), "Previous");
        assert_eq!(list.control(PageDirection::Next).label(), "Next");
    }

    #[test]
    fn test_activating_next_fetches_once() {
        let results = page(None, Some("url2"), Vec::new());
        let list = ResultList::new(&results);
        let api = StubApi::returning(page(Some("url1"), None, vec![titled("Bowl")]));
        let state = RecordingState::new();
        let sink = RecordingWriter::new();

        ResultList::activate_page(list.next(), &api, &state, &sink);

        assert_eq!(api.calls(), vec![ApiCall::Url("url2".into())]);
        assert_eq!(state.loading_calls(), vec![true, false]);
        assert_eq!(state.results_calls().len(), 1);
    }

    #[test]
    fn test_disabled_control_is_inert() {
        let results = page(None, Some("url2"), Vec::new());
        let list = ResultList::new(&results);
        let api = StubApi::new();
        let state = RecordingState::new();
        let sink = RecordingWriter::new();

        ResultList::activate_page(list.previous(), &api, &state, &sink);

        assert!(api.calls().is_empty());
        assert!(state.calls().is_empty());
    }

    #[test]
    fn test_failed_page_fetch_keeps_results() {
        let api = StubApi::failing("503");
        let state = RecordingState::new();
        let sink = RecordingWriter::new();

        ResultList::fetch_page("url3", &api, &state, &sink);

        assert!(state.results_calls().is_empty());
        assert_eq!(state.loading_calls(), vec![true, false]);
        assert_eq!(sink.errors().len(), 1);
    }

    #[test]
    fn test_select_promotes_without_fetch() {
        let record = Record {
            title: Some("Vase".into()),
            primaryimageurl: Some("x.jpg".into()),
            ..Record::default()
        };
        let state = RecordingState::new();

        ResultList::select(&record, &state);

        assert_eq!(state.featured_calls(), vec![Some(record)]);
        assert!(state.loading_calls().is_empty());
    }

    #[test]
    fn test_entries() {
        let with_image = Record {
            title: Some("Vase".into()),
            primaryimageurl: Some("x.jpg".into()),
            description: Some("Blue vase".into()),
            ..Record::default()
        };
        let untitled = Record {
            title: Some(String::new()),
            primaryimageurl: Some(String::new()),
            ..Record::default()
        };
        let results = page(None, None, vec![with_image, untitled, Record::default()]);
        let list = ResultList::new(&results);
        let entries = list.entries();

        assert_eq!(list.len(), 3);
        assert_eq!(entries[0].heading, "Vase");
        assert_eq!(
            entries[0].image,
            Some(Thumbnail {
                src: "x.jpg",
                alt: Some("Blue vase"),
            })
        );
        assert_eq!(entries[1].heading, MISSING_INFO);
        assert_eq!(entries[1].image, None);
        assert_eq!(entries[2].heading, MISSING_INFO);
        assert_eq!(entries[2].index, 2);
    }
}
