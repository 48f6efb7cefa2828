//! Collaborator trait for the collection API

use super::error::Result;
use super::types::SearchResponse;

/// Source of search result pages
///
/// The view layer only ever talks to this trait, so the HTTP client can be
/// swapped for a fake in tests or for another museum backend.
pub trait CollectionApi: Send + Sync {
    /// Search for records whose `term` field matches `value`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success response, or a
    /// malformed payload.
    fn fetch_by_term_and_value(&self, term: &str, value: &str) -> Result<SearchResponse>;

    /// Fetch a result page from a fully-formed URL (typically a `prev`/`next`
    /// cursor handed out by a previous response)
    ///
    /// # Errors
    ///
    /// Same failure contract as [`CollectionApi::fetch_by_term_and_value`].
    fn fetch_by_url(&self, url: &str) -> Result<SearchResponse>;
}
