//! Curio CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! curio
//! curio browse culture Roman
//! curio browse --url "https://api.harvardartmuseums.org/object?apikey=...&page=2"
//!
//! # One-shot searches
//! curio search culture Roman
//! curio --format json search medium Bronze
//! curio page "https://api.harvardartmuseums.org/object?apikey=...&page=2"
//! curio feature culture Greek --index 2
//!
//! # Configuration
//! curio config set api_key=XXXX
//! curio config get base_url
//! ```
//!
//! # Configuration
//!
//! On first run, curio prompts for an API key. Configuration is stored in
//! the user's config directory (`~/.config/curio/config.toml` on Linux).
//!
//! # Logging
//!
//! `CURIO_LOG` sets the filter (default `warn`). One-shot commands log to
//! stderr; the browser logs to `log_file`, or `curio/curio.log` under the
//! user's cache directory.

use clap::CommandFactory;
use colored::Colorize;
use curio::{
    CurioError,
    api::{CollectionApi, HarvardClient, Record, SearchResponse},
    cli::{Cli, Commands, ConfigCommands, OutputFormat},
    config::CurioConfig,
    output,
    state::SharedState,
    ui::{InitialQuery, OutputWriter, RatatuiBrowser, StdoutWriter, TracingWriter},
    view::{FeatureDetail, ResultList},
};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, CurioError>;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("CURIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr for one-shot commands
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Log to a file while the browser owns the terminal
///
/// Only a missing cache directory leaves the browser without a subscriber.
fn init_file_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_records(response: &SearchResponse, format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let list = ResultList::new(response);
            for line in output::result_list(&list, &response.info, quiet) {
                println!("{line}");
            }
            if !quiet {
                if let Some(url) = response.info.prev_url() {
                    println!("{} {}", "prev:".dimmed(), url);
                }
                if let Some(url) = response.info.next_url() {
                    println!("{} {}", "next:".dimmed(), url);
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(response)?),
        OutputFormat::Csv => output::write_csv(&response.records, io::stdout().lock())?,
    }
    Ok(())
}

fn print_record(record: &Record, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in output::feature(&FeatureDetail::project(Some(record))) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            output::write_csv(std::slice::from_ref(record), io::stdout().lock())?;
        }
    }
    Ok(())
}

fn handle_search_command(
    api: &dyn CollectionApi,
    term: &str,
    value: &str,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let response = api.fetch_by_term_and_value(term, value)?;
    print_records(&response, format, quiet)
}

fn handle_page_command(
    api: &dyn CollectionApi,
    url: &str,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let response = api.fetch_by_url(url)?;
    print_records(&response, format, quiet)
}

fn handle_feature_command(
    api: &dyn CollectionApi,
    term: &str,
    value: &str,
    index: usize,
    format: OutputFormat,
) -> Result<()> {
    let response = api.fetch_by_term_and_value(term, value)?;
    let record = response.records.get(index).ok_or_else(|| {
        CurioError::InvalidInput(format!(
            "No record at index {index}: the page holds {} record(s)",
            response.records.len()
        ))
    })?;
    print_record(record, format)
}

fn handle_browse_command(
    config: &CurioConfig,
    api: HarvardClient,
    term: Option<String>,
    value: Option<String>,
    url: Option<String>,
) -> Result<()> {
    init_file_logging(config.log_path().as_deref())?;

    let initial = match (url, term, value) {
        (Some(url), _, _) => InitialQuery::Url(url),
        (None, Some(term), Some(value)) => InitialQuery::TermValue { term, value },
        _ => InitialQuery::TermValue {
            term: config.start_term.clone(),
            value: config.start_value.clone(),
        },
    };

    let mut browser = RatatuiBrowser::new(
        Arc::new(api),
        Arc::new(SharedState::new()),
        Arc::new(TracingWriter::new()),
    );
    browser.run(initial)?;
    Ok(())
}

fn handle_config_command(mut config: CurioConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = ConfigCommands::split_setting(setting).ok_or_else(|| {
                CurioError::InvalidInput("Invalid format. Use: curio config set key=value".into())
            })?;
            config.set_value(key, value)?;
            config.save()?;
            if !quiet {
                StdoutWriter::new().success(&format!("Set {key} = {}", config.get_value(key)?));
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
        ConfigCommands::Path => {
            println!("{}", CurioConfig::config_path()?.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    match command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "curio", &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => {
            init_stderr_logging();
            let config = CurioConfig::load()?;
            let quiet = cli.quiet || config.quiet;
            handle_config_command(config, &command, quiet)
        }
        Commands::Browse { term, value, url } => {
            let config = CurioConfig::load_or_setup()?;
            let api = HarvardClient::from_config(&config)?;
            handle_browse_command(&config, api, term, value, url)
        }
        Commands::Search { term, value } => {
            init_stderr_logging();
            let config = CurioConfig::load_or_setup()?;
            let api = HarvardClient::from_config(&config)?;
            handle_search_command(&api, &term, &value, cli.format, cli.quiet || config.quiet)
        }
        Commands::Page { url } => {
            init_stderr_logging();
            let config = CurioConfig::load_or_setup()?;
            let api = HarvardClient::from_config(&config)?;
            handle_page_command(&api, &url, cli.format, cli.quiet || config.quiet)
        }
        Commands::Feature { term, value, index } => {
            init_stderr_logging();
            let config = CurioConfig::load_or_setup()?;
            let api = HarvardClient::from_config(&config)?;
            handle_feature_command(&api, &term, &value, index, cli.format)
        }
    }
}
