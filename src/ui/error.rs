//! UI error types

use thiserror::Error;

/// Errors that can occur while running the terminal UI
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing, or event polling failed
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),

    /// A worker thread could not be started
    #[error("Failed to start background fetch: {0}")]
    SpawnError(String),

    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
