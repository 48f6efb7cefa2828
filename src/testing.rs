//! Testing utilities for curio
//!
//! Recording fakes for the three seams the views depend on: the state
//! handle, the diagnostic sink, and the collection API.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, CollectionApi, ObjectImage, Person, Record, SearchResponse};
use crate::state::StateHandle;
use crate::ui::output::OutputWriter;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One observed setter call
#[derive(Debug, Clone, PartialEq)]
pub enum StateCall {
    Loading(bool),
    Results(SearchResponse),
    Featured(Option<Record>),
}

/// State handle that records every call in order
#[derive(Debug, Default)]
pub struct RecordingState {
    calls: Mutex<Vec<StateCall>>,
}

impl RecordingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<StateCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn loading_calls(&self) -> Vec<bool> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StateCall::Loading(flag) => Some(flag),
                _ => None,
            })
            .collect()
    }

    pub fn results_calls(&self) -> Vec<SearchResponse> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StateCall::Results(results) => Some(results),
                _ => None,
            })
            .collect()
    }

    pub fn featured_calls(&self) -> Vec<Option<Record>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StateCall::Featured(record) => Some(record),
                _ => None,
            })
            .collect()
    }
}

impl StateHandle for RecordingState {
    fn set_is_loading(&self, loading: bool) {
        self.calls.lock().unwrap().push(StateCall::Loading(loading));
    }

    fn set_search_results(&self, results: SearchResponse) {
        self.calls.lock().unwrap().push(StateCall::Results(results));
    }

    fn set_featured_result(&self, record: Option<Record>) {
        self.calls.lock().unwrap().push(StateCall::Featured(record));
    }
}

/// Diagnostic sink that keeps error reports
#[derive(Debug, Default)]
pub struct RecordingWriter {
    errors: Mutex<Vec<String>>,
    other: Mutex<Vec<String>>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn other(&self) -> Vec<String> {
        self.other.lock().unwrap().clone()
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.other.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.write(message);
    }

    fn warning(&self, message: &str) {
        self.write(message);
    }

    fn info(&self, message: &str) {
        self.write(message);
    }
}

/// A request the stub API received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    TermValue(String, String),
    Url(String),
}

/// Collection API fake with scripted replies
///
/// Replies are consumed in order; once exhausted every call fails.
#[derive(Debug, Default)]
pub struct StubApi {
    replies: Mutex<VecDeque<Result<SearchResponse, String>>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(response: SearchResponse) -> Self {
        let api = Self::new();
        api.push_ok(response);
        api
    }

    pub fn failing(message: &str) -> Self {
        let api = Self::new();
        api.push_err(message);
        api
    }

    pub fn push_ok(&self, response: SearchResponse) {
        self.replies.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_err(&self, message: &str) {
        self.replies.lock().unwrap().push_back(Err(message.to_string()));
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn reply(&self, call: ApiCall) -> Result<SearchResponse, ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::Decode(message)),
            None => Err(ApiError::Decode("no scripted reply".into())),
        }
    }
}

impl CollectionApi for StubApi {
    fn fetch_by_term_and_value(&self, term: &str, value: &str) -> Result<SearchResponse, ApiError> {
        self.reply(ApiCall::TermValue(term.to_string(), value.to_string()))
    }

    fn fetch_by_url(&self, url: &str) -> Result<SearchResponse, ApiError> {
        self.reply(ApiCall::Url(url.to_string()))
    }
}

/// A record with only a title
pub fn titled(title: &str) -> Record {
    Record {
        title: Some(title.to_string()),
        ..Record::default()
    }
}

/// A fully populated record
pub fn full_record() -> Record {
    Record {
        id: Some(1),
        objectnumber: Some("1925.30.1".into()),
        url: Some("https://harvardartmuseums.org/collections/object/1".into()),
        title: Some("Amphora".into()),
        dated: Some("c. 520 BCE".into()),
        images: Some(vec![
            ObjectImage {
                imageid: Some(10),
                baseimageurl: Some("https://img/10".into()),
                alttext: Some("front".into()),
            },
            ObjectImage {
                imageid: Some(11),
                baseimageurl: Some("https://img/11".into()),
                alttext: None,
            },
        ]),
        primaryimageurl: Some("https://img/primary".into()),
        description: Some("Black-figure amphora".into()),
        culture: Some("Greek".into()),
        style: Some("Black-figure".into()),
        technique: Some("Wheel-thrown".into()),
        medium: Some("Terracotta".into()),
        dimensions: Some("H. 40 cm".into()),
        people: Some(vec![
            Person {
                displayname: Some("A".into()),
                role: Some("Artist".into()),
            },
            Person {
                displayname: Some("B".into()),
                role: None,
            },
        ]),
        department: Some("Department of Ancient Art".into()),
        division: Some("Asian and Mediterranean Art".into()),
        contact: Some("am_asianmediterranean@harvard.edu".into()),
        creditline: Some("Gift of a friend".into()),
        alttext: Some("An amphora".into()),
    }
}
