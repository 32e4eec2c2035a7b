use std::sync::Arc;

use anyhow::Result;

use crate::client::{gemini::GeminiClient, CompletionClient};
use crate::config::GeminiConfig;

/// Client factory for creating completion clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create the Gemini completion client.
    ///
    /// A missing API key is not an error here: the client is still built and
    /// answers every request with [`crate::CompletionOutcome::ConfigError`].
    pub fn create(config: GeminiConfig) -> Result<Arc<dyn CompletionClient>> {
        Ok(Arc::new(GeminiClient::new(config)?))
    }
}
