//! # geminibot-llm-api
//!
//! Completion client for the Google Gemini `generateContent` endpoint.
//!
//! - **Total interface**: [`CompletionClient::complete`] always yields a
//!   [`CompletionOutcome`]; failures are classified, never propagated.
//! - **Single mapping**: every outcome turns into its user-facing text through
//!   [`CompletionOutcome::into_display`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use geminibot_llm_api::{ClientFactory, GeminiConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GeminiConfig {
//!         api_key: Some("your-api-key".to_string()),
//!         ..GeminiConfig::default()
//!     };
//!     let client = ClientFactory::create(config)?;
//!
//!     let history = vec!["Hello!".to_string()];
//!     let reply = client.complete(&history).await.into_display();
//!     println!("Response: {}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;


// Re-export commonly used types
pub use client::{
    CompletionClient,
    CompletionOutcome,
    Content,
    GenerateContentRequest,
    Part,
    gemini::GeminiClient,
};

pub use config::{
    ClientFactory,
    GeminiConfig,
    DEFAULT_GEMINI_MODEL,
    DEFAULT_TIMEOUT_SECS,
    GEMINI_API_BASE,
    generate_content_url,
    normalize_base_url,
};
