//! Ratatui widgets for the collection browser

mod feature_pane;
mod help_bar;
mod help_overlay;
mod result_list;
mod status_bar;

pub use feature_pane::FeaturePane;
pub use help_bar::{BROWSER_HINTS, HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use result_list::ResultListPane;
pub use status_bar::StatusBar;
