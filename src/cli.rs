//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: Full-screen collection browser (default)
//! - **search**: Print one page of records matching a term/value pair
//! - **page**: Print the page behind a pagination URL
//! - **feature**: Print the feature view of one matching record
//! - **config**: Read and write configuration values
//! - **completions**: Generate shell completion scripts
//!
//! Global `--quiet` prints bare results for scripting; `--format` switches
//! record output to JSON or CSV.
//!
//! # Examples
//!
//! ```
//! use curio::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["curio", "search", "culture", "Roman"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// How records are printed by one-shot commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// One CSV row per record
    Csv,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., page_size=20)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., base_url)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,
}

impl ConfigCommands {
    /// Split a `key=value` setting, trimming both halves
    #[must_use]
    pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
        let (key, value) = setting.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key, value.trim()))
    }
}

#[derive(Parser, Debug)]
#[command(name = "curio")]
#[command(about = "Search and browse museum collection records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Output format for records
    #[arg(long = "format", value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse the collection interactively (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Field to search on startup (e.g., culture)
        #[arg(value_name = "TERM", requires = "value")]
        term: Option<String>,

        /// Value of the startup field (e.g., Roman)
        #[arg(value_name = "VALUE")]
        value: Option<String>,

        /// Start from a page URL instead of a term/value search
        #[arg(long = "url", value_name = "URL", conflicts_with = "term")]
        url: Option<String>,
    },

    /// Print records whose TERM matches VALUE
    #[command(visible_alias = "s")]
    Search {
        #[arg(value_name = "TERM")]
        term: String,

        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Print the page behind a pagination URL
    #[command(visible_alias = "p")]
    Page {
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Print the feature view of a matching record
    #[command(visible_alias = "f")]
    Feature {
        #[arg(value_name = "TERM")]
        term: String,

        #[arg(value_name = "VALUE")]
        value: String,

        /// Position of the record in the result page (0-based)
        #[arg(short = 'i', long = "index", default_value_t = 0)]
        index: usize,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            term: None,
            value: None,
            url: None,
        })
    }
}
