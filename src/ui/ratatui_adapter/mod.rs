//! Ratatui front end for the collection browser
//!
//! ```text
//! ┌──────────────────────────┬─────────────────────────────────┐
//! │ Results (n)              │ Feature                         │
//! │ ◀ Previous   Next ▶      │ Title                           │
//! │ > ▣ Amphora  c. 520 BCE  │ c. 520 BCE                      │
//! │   ▣ Lamp                 │ Culture     Greek               │
//! ├──────────────────────────┴─────────────────────────────────┤
//! │ ⠋ Loading…                           Page 1 of 4, 40 records│
//! └────────────────────────────────────────────────────────────┘
//!  ↑/↓:navigate  Enter:feature / search  ←/→:page  ...
//! ```
//!
//! The browser owns nothing but cursors and focus. Records, the featured
//! record and the loading flag live in [`SharedState`](crate::state::SharedState),
//! which worker threads write and every frame reads.

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::{InitialQuery, RatatuiBrowser};
pub use events::{EventResult, Extent, handle_key};
pub use state::{AppState, FocusPane, Mode};
pub use theme::Theme;
