use std::time::Duration;

pub mod factory;
pub use factory::ClientFactory;

/// Default Gemini API base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default model name
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";

/// Timeout applied to each completion request
pub const DEFAULT_TIMEOUT_SECS: u64 = 40;

/// Settings for [`crate::GeminiClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    /// API key; `None` or empty puts the client in degraded mode
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Strip trailing slashes and any `/v1beta...` suffix so a full endpoint URL
/// pasted into the configuration still resolves to the base.
pub fn normalize_base_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    match url.find("/v1beta") {
        Some(pos) => url[..pos].to_string(),
        None => url.to_string(),
    }
}

/// Build the `generateContent` URL for a model. The API key is added as a
/// query parameter at request time and is never part of this string.
pub fn generate_content_url(base_url: &str, model: &str) -> String {
    let model = model.trim().trim_start_matches("models/");
    format!("{}/v1beta/models/{}:generateContent", normalize_base_url(base_url), model)
}
