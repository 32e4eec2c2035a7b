use std::time::Duration;

use geminibot_llm_api::GeminiConfig;
use geminibot_logging::redact_secret;
use thiserror::Error;
use tracing::{info, warn};

use crate::cli::Cli;

/// Configuration problems that stop the bot from starting
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Telegram bot token not found. Set TELEGRAM_BOT_TOKEN or pass --telegram-token")]
    MissingTelegramToken,
    #[error("History limit must be at least 1")]
    InvalidHistoryLimit,
    #[error("Request timeout must be at least 1 second")]
    InvalidTimeout,
}

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_token: String,
    pub gemini: GeminiConfig,
    pub history_limit: usize,
}

/// Treat unset and blank values the same way.
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let telegram_token = non_empty(&cli.telegram_token).ok_or(ConfigError::MissingTelegramToken)?;

    if cli.history_limit == 0 {
        return Err(ConfigError::InvalidHistoryLimit);
    }
    if cli.timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout);
    }

    let api_key = non_empty(&cli.gemini_api_key);
    match api_key.as_deref() {
        Some(key) => info!(key = %redact_secret(key), "Gemini API key loaded"),
        None => warn!("Gemini API key not found! Replies from Gemini will not work. Set GEMINI_API_KEY."),
    }

    let gemini = GeminiConfig {
        api_key,
        model: cli.model.trim().to_string(),
        base_url: cli.api_base.trim().to_string(),
        timeout: Duration::from_secs(cli.timeout_secs),
    };

    Ok(AppConfig {
        telegram_token,
        gemini,
        history_limit: cli.history_limit,
    })
}
