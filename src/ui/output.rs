//! Output and diagnostic sinks
//!
//! [`OutputWriter`] is the one channel the view layer reports through. The
//! CLI writes to the terminal ([`StdoutWriter`]), the TUI routes fetch
//! failures to the log ([`TracingWriter`]) so they never paint over the
//! screen, and transient TUI feedback lands in a [`StatusLog`].

use colored::Colorize;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Trait for output operations
///
/// # Examples
///
/// ```
/// use curio::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.success("Fetched 10 records");
/// output.error("Request failed");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Forwards every message to `tracing` under the `curio::diagnostics` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWriter;

impl TracingWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputWriter for TracingWriter {
    fn write(&self, message: &str) {
        tracing::info!(target: "curio::diagnostics", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "curio::diagnostics", "{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!(target: "curio::diagnostics", "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "curio::diagnostics", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::debug!(target: "curio::diagnostics", "{message}");
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// A status message with its creation time
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    /// Check if the message has outlived `ttl`
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

/// Bounded buffer of short-lived messages for the TUI status bar
///
/// Holds at most `capacity` messages; older ones are dropped first.
#[derive(Debug)]
pub struct StatusLog {
    messages: Mutex<VecDeque<StatusMessage>>,
    ttl: Duration,
    capacity: usize,
}

impl StatusLog {
    /// Create a log with a 5 second TTL
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Mutex::new(VecDeque::new()),
            ttl,
            capacity: 32,
        }
    }

    /// Most recent unexpired message
    #[must_use]
    pub fn latest(&self) -> Option<StatusMessage> {
        let messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        messages
            .iter()
            .rev()
            .find(|msg| !msg.is_expired(self.ttl))
            .cloned()
    }

    /// Number of unexpired messages
    #[must_use]
    pub fn active_count(&self) -> usize {
        let messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        messages.iter().filter(|msg| !msg.is_expired(self.ttl)).count()
    }

    /// Drop expired messages
    pub fn prune(&self) {
        let mut messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        messages.retain(|msg| !msg.is_expired(self.ttl));
    }

    fn push(&self, level: MessageLevel, text: &str) {
        let mut messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        messages.push_back(StatusMessage::new(level, text));
        while messages.len() > self.capacity {
            messages.pop_front();
        }
    }
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusLog {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_log_latest() {
        let log = StatusLog::new();
        log.info("Opened image");
        log.success("Copied URL");

        let latest = log.latest().unwrap();
        assert_eq!(latest.level, MessageLevel::Success);
        assert_eq!(latest.text, "Copied URL");
        assert_eq!(log.active_count(), 2);
    }

    #[test]
    fn test_status_log_ttl() {
        let log = StatusLog::with_ttl(Duration::from_millis(30));
        log.write("Message");
        assert_eq!(log.active_count(), 1);

        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(log.active_count(), 0);
        assert!(log.latest().is_none());

        log.prune();
        assert_eq!(log.messages.lock().unwrap().len(), 0);
    }

    #[test]
    fn test_status_log_is_bounded() {
        let log = StatusLog::new();
        for i in 0..100 {
            log.write(&format!("message {i}"));
        }
        assert_eq!(log.active_count(), 32);
        assert_eq!(log.latest().unwrap().text, "message 99");
    }

    #[test]
    fn test_stdout_and_tracing_writers_do_not_panic() {
        let stdout = StdoutWriter::default();
        stdout.info("info");
        let tracing = TracingWriter::new();
        tracing.error("error");
        tracing.warning("warning");
    }
}
