//! Interactive setup wizard for first-time configuration

use super::CurioConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the API key and endpoint
///
/// An empty key is accepted; it can be set later with
/// `curio config set api_key=<KEY>` or the `CURIO_API_KEY` variable.
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<CurioConfig, ConfigError> {
    println!("Welcome to curio! Let's connect to the collection API.\n");
    println!("Request a free key at https://harvardartmuseums.org/collections/api\n");

    let theme = ColorfulTheme::default();

    let api_key: String = Input::with_theme(&theme)
        .with_prompt("API key")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = CurioConfig::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt("API base URL")
        .default(config.base_url.clone())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    config.set_value("api_key", &api_key)?;
    config.set_value("base_url", &base_url)?;
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

