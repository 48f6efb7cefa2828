//! Loading-guarded fetch sequence shared by every request-issuing view

use crate::api::{ApiError, SearchResponse};
use crate::state::StateHandle;
use crate::ui::output::OutputWriter;

/// Run one fetch against shared state
///
/// Sets loading, runs `fetch`, stores the response on success or reports
/// the error on failure, then clears loading. Loading is cleared on every
/// path and prior results are left alone on failure.
pub fn run_fetch<F>(state: &dyn StateHandle, diagnostics: &dyn OutputWriter, fetch: F)
where
    F: FnOnce() -> Result<SearchResponse, ApiError>,
{
    state.set_is_loading(true);

    match fetch() {
        Ok(results) => state.set_search_results(results),
        Err(e) => {
            tracing::warn!(error = %e, "fetch failed");
            diagnostics.error(&format!("Fetch failed: {e}"));
        }
    }

    state.set_is_loading(false);
}
