//! HTTP client for the Harvard Art Museums collection API

use super::error::{ApiError, Result};
use super::traits::CollectionApi;
use super::types::SearchResponse;
use crate::config::CurioConfig;
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking HTTP implementation of [`CollectionApi`]
#[derive(Debug, Clone)]
pub struct HarvardClient {
    http: Client,
    base_url: String,
    api_key: String,
    page_size: Option<u32>,
}

impl HarvardClient {
    /// Create a client for the given base URL and key
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingApiKey` if `api_key` is empty, or
    /// `ApiError::Http` if the underlying client cannot be built.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            page_size: None,
        })
    }

    /// Create a client from the application configuration
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingApiKey` if the configuration has no key.
    pub fn from_config(config: &CurioConfig) -> Result<Self> {
        let api_key = config.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;
        let client = Self::new(
            &config.base_url,
            api_key,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(client.with_page_size(config.page_size))
    }

    /// Request a specific number of records per page
    #[must_use]
    pub const fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the object-search URL for a term/value pair
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base URL does not parse.
    pub fn term_value_url(&self, term: &str, value: &str) -> Result<Url> {
        build_query_url(&self.base_url, &self.api_key, term, value, self.page_size)
    }

    fn get(&self, url: Url) -> Result<SearchResponse> {
        tracing::debug!(url = %redact_key(&url), "fetching search results");

        let response = self.http.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: redact_key(&url),
            });
        }

        let body = response.text()?;
        let page: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        tracing::debug!(
            records = page.records.len(),
            page = ?page.info.page,
            pages = ?page.info.pages,
            "received search results"
        );
        Ok(page)
    }
}

impl CollectionApi for HarvardClient {
    fn fetch_by_term_and_value(&self, term: &str, value: &str) -> Result<SearchResponse> {
        let url = self.term_value_url(term, value)?;
        self.get(url)
    }

    fn fetch_by_url(&self, url: &str) -> Result<SearchResponse> {
        let url = Url::parse(url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;
        self.get(url)
    }
}

/// Build `{base_url}/object?apikey=..&{term}={value}[&size=..]`
///
/// # Errors
///
/// Returns `ApiError::InvalidUrl` if the base URL does not parse.
pub fn build_query_url(
    base_url: &str,
    api_key: &str,
    term: &str,
    value: &str,
    page_size: Option<u32>,
) -> Result<Url> {
    let endpoint = format!("{}/object", base_url.trim_end_matches('/'));
    let mut url =
        Url::parse(&endpoint).map_err(|e| ApiError::InvalidUrl(format!("{endpoint}: {e}")))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("apikey", api_key);
        query.append_pair(term, value);
        if let Some(size) = page_size {
            query.append_pair("size", &size.to_string());
        }
    }

    Ok(url)
}

/// Render a URL for logs with the API key masked
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == "apikey" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), value)
        })
        .collect();

    if pairs.is_empty() {
        return redacted.to_string();
    }

    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
