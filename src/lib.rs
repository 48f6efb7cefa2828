//! Curio - a terminal browser for museum collection records
//!
//! Searches a collection API, renders paginated results, and projects a
//! selected record into a detailed feature view whose searchable facts
//! re-run the search.
//!
//! The views in [`view`] hold no state of their own. They read a snapshot
//! and write through the [`state::StateHandle`] capability, so the same
//! logic drives both the ratatui browser and the one-shot CLI commands.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod config;
pub mod output;
pub mod state;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CurioError {
    /// Collection API error
    #[error("API error: {0}")]
    ApiError(#[from] api::ApiError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// CSV output failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
