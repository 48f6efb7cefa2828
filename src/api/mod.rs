//! Collection API boundary
//!
//! The view layer depends only on the [`CollectionApi`] trait and the wire
//! types in [`types`]. [`HarvardClient`] is the production implementation.
//!
//! # Example
//!
//! ```no_run
//! use curio::api::{CollectionApi, HarvardClient};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HarvardClient::new(
//!     "https://api.harvardartmuseums.org",
//!     "my-api-key",
//!     Duration::from_secs(10),
//! )?;
//! let page = client.fetch_by_term_and_value("culture", "Roman")?;
//! println!("{} records", page.records.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod traits;
pub mod types;

pub use client::{HarvardClient, build_query_url};
pub use error::{ApiError, Result};
pub use traits::CollectionApi;
pub use types::{ObjectImage, PageInfo, Person, Record, SearchResponse};
