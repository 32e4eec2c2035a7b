//! geminibot application library
//!
//! Configuration, the Telegram transport and the bootstrap that wires the
//! history store and the Gemini client into the dispatcher.

use std::sync::Arc;

use anyhow::{Context, Result};
use geminibot_chat::HistoryStore;
use geminibot_llm_api::ClientFactory;
use tracing::info;

pub mod app;
pub mod cli;
pub mod telegram;

pub use app::{setup_from_cli, AppConfig, ConfigError};
pub use cli::Cli;
pub use telegram::{BotState, Command, TelegramTransport};

/// Build shared state from the configuration.
pub fn build_state(config: &AppConfig) -> Result<Arc<BotState>> {
    let client = ClientFactory::create(config.gemini.clone())
        .context("Failed to create Gemini client")?;

    info!(
        model = %config.gemini.model,
        history_limit = config.history_limit,
        timeout_secs = config.gemini.timeout.as_secs(),
        "Gemini client ready"
    );

    Ok(Arc::new(BotState {
        history: HistoryStore::new(config.history_limit),
        client,
    }))
}

/// Start the bot and block until it is interrupted.
pub async fn run(config: AppConfig) -> Result<()> {
    let state = build_state(&config)?;
    telegram::run_polling(config.telegram_token, state).await
}
