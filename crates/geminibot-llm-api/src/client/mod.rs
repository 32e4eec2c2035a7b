use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod gemini;

/// Request body for `models/{model}:generateContent`.
///
/// History is sent as one content block with one text part per entry, in
/// order. Entries carry no role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// A content block of the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A single text part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// Build the request from the conversation window, oldest entry first.
    pub fn from_history(history: &[String]) -> Self {
        let parts = history
            .iter()
            .map(|entry| Part { text: entry.clone() })
            .collect();

        Self {
            contents: vec![Content { parts }],
        }
    }
}

/// Result of one completion round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The first candidate's text
    Success(String),
    /// No API key configured; no request was made
    ConfigError,
    /// The endpoint answered with a non-2xx status
    HttpError { status: u16 },
    /// A 2xx body that carried an `error` object instead of candidates
    ApiError { message: String },
    /// Connect/DNS failure, timeout, or the body could not be read
    NetworkError,
    /// Valid JSON with neither a candidate text nor an error
    ParseError,
    /// Anything else; details only go to the log
    InternalError,
}

impl CompletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::ConfigError => "config_error",
            Self::HttpError { .. } => "http_error",
            Self::ApiError { .. } => "api_error",
            Self::NetworkError => "network_error",
            Self::ParseError => "parse_error",
            Self::InternalError => "internal_error",
        }
    }

    /// Text shown to the chat user for this outcome.
    pub fn into_display(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::ConfigError => "Configuration error: Gemini API key not found.".to_string(),
            Self::HttpError { status } => format!(
                "API error ({}). Try again later or check the console for details.",
                status
            ),
            Self::ApiError { message } => format!("Gemini API error: {}", message),
            Self::NetworkError => "Network error while contacting Gemini. Try again later.".to_string(),
            Self::ParseError => "Could not extract a meaningful reply from Gemini.".to_string(),
            Self::InternalError => "An internal error occurred. Check the logs.".to_string(),
        }
    }
}

/// Completion client trait
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a reply for the given history window, oldest entry first.
    async fn complete(&self, history: &[String]) -> CompletionOutcome;
}
