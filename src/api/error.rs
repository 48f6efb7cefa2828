//! Collection API error types
//!
//! Every way a fetch can fail collapses into [`ApiError`]. The view layer
//! treats all variants alike: report and keep the previous results.

use thiserror::Error;

/// Errors raised by a [`CollectionApi`](super::CollectionApi) implementation
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key was configured
    #[error("No API key configured. Run 'curio config set api_key=<KEY>' or set CURIO_API_KEY")]
    MissingApiKey,

    /// A request URL could not be built or parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The response body was not a valid search response
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
