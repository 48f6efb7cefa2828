//! Backend-agnostic views over the shared UI state
//!
//! - **[`ResultList`]** - the current page and its pagination controls
//! - **[`FeatureDetail`]** - facts and photos of the featured record
//! - **[`SearchTrigger`]** - a fact value that re-runs the search
//!
//! Views hold no state. Projections borrow from a state snapshot; actions
//! take the collaborator, the [`StateHandle`](crate::state::StateHandle)
//! and a diagnostic sink as arguments. Both the TUI and the CLI render from
//! these types.

mod feature;
mod fetch;
mod preview;
mod searchable;

pub use feature::{
    Fact, FactContent, FactEntry, FeatureDetail, FeatureView, ObjectFeature, Photo, record_facts,
};
pub use fetch::run_fetch;
pub use preview::{MISSING_INFO, PageControl, PageDirection, ResultEntry, ResultList, Thumbnail};
pub use searchable::SearchTrigger;
