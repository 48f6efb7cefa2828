//! Shared UI state and the capability handle the views update it through
//!
//! The views never own state. They receive a [`StateHandle`] and call its
//! three setters; whichever front end owns the state decides how to store
//! it. [`SharedState`] is the thread-safe owner used by the TUI and CLI.

use crate::api::{Record, SearchResponse};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Capability set for updating shared UI state
pub trait StateHandle: Send + Sync {
    /// Raise or clear the loading indicator
    fn set_is_loading(&self, loading: bool);

    /// Replace the current result page wholesale
    fn set_search_results(&self, results: SearchResponse);

    /// Select (or clear) the record shown in the feature view
    fn set_featured_result(&self, record: Option<Record>);
}

/// Plain snapshot of the UI state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub search_results: SearchResponse,
    pub featured_result: Option<Record>,
    pub is_loading: bool,
}

/// Mutex-guarded [`UiState`] owner
///
/// Each setter is a single short critical section. Concurrent fetches race
/// and the last write wins; the loading flag is a plain boolean.
#[derive(Debug, Default)]
pub struct SharedState {
    inner: Mutex<UiState>,
}

impl SharedState {
    /// Create an owner with empty results and nothing featured
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an owner seeded with an initial state
    #[must_use]
    pub const fn with_state(state: UiState) -> Self {
        Self {
            inner: Mutex::new(state),
        }
    }

    /// Clone the current state for rendering
    #[must_use]
    pub fn snapshot(&self) -> UiState {
        self.lock().clone()
    }

    /// Whether a fetch is currently flagged as in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    // A panic in another holder must not take the UI down with it.
    fn lock(&self) -> MutexGuard<'_, UiState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateHandle for SharedState {
    fn set_is_loading(&self, loading: bool) {
        self.lock().is_loading = loading;
    }

    fn set_search_results(&self, results: SearchResponse) {
        self.lock().search_results = results;
    }

    fn set_featured_result(&self, record: Option<Record>) {
        self.lock().featured_result = record;
    }
}
