//! User-facing surfaces
//!
//! - **[`output`]** - the [`OutputWriter`] diagnostic sink and its adapters
//! - **[`ratatui_adapter`]** - the full-screen browser
//!
//! ```
//! use curio::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Configuration saved");
//! output.error("Fetch failed");
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusLog, StatusMessage, StdoutWriter, TracingWriter};
pub use ratatui_adapter::{InitialQuery, RatatuiBrowser};
