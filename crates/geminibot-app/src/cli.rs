use clap::Parser;
use geminibot_chat::MAX_HISTORY_LENGTH;
use geminibot_llm_api::{DEFAULT_GEMINI_MODEL, DEFAULT_TIMEOUT_SECS, GEMINI_API_BASE};

/// CLI arguments for geminibot. Every option can also come from the
/// environment or a `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(name = "geminibot")]
#[command(about = "Telegram bot that relays conversations to Google Gemini")]
#[command(version)]
pub struct Cli {
    /// Telegram bot token (required)
    #[arg(long, value_name = "TOKEN", env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Gemini API key. Without it the bot starts, but every reply is a
    /// configuration error message.
    #[arg(long, value_name = "KEY", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Gemini model name
    #[arg(long, value_name = "MODEL", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub model: String,

    /// Base URL of the Gemini API
    #[arg(long, value_name = "URL", env = "GEMINI_API_BASE", default_value = GEMINI_API_BASE)]
    pub api_base: String,

    /// Messages kept per conversation (user and bot turns both count)
    #[arg(long, value_name = "N", env = "GEMINIBOT_HISTORY_LIMIT", default_value_t = MAX_HISTORY_LENGTH)]
    pub history_limit: usize,

    /// Timeout for each Gemini request, in seconds
    #[arg(long, value_name = "SECS", env = "GEMINIBOT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Enable debug logging (request bodies, outcomes). RUST_LOG overrides.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
