use crate::client::{CompletionClient, CompletionOutcome, GenerateContentRequest};
use crate::config::{generate_content_url, GeminiConfig};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Gemini client using the `generateContent` REST endpoint
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client for Gemini")?;

        let endpoint = generate_content_url(&config.base_url, &config.model);
        let api_key = config.api_key.filter(|key| !key.trim().is_empty());

        Ok(Self {
            api_key,
            model: config.model,
            endpoint,
            client,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send_request(&self, api_key: &str, request: &GenerateContentRequest) -> CompletionOutcome {
        let response = match self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return classify_transport_error(&self.endpoint, e),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return classify_transport_error(&self.endpoint, e),
        };

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Gemini returned an HTTP error status");
            return CompletionOutcome::HttpError { status: status.as_u16() };
        }

        let data: Value = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, body = %body, "Gemini returned a body that is not JSON");
                return CompletionOutcome::InternalError;
            }
        };

        parse_generate_content_response(&data)
    }
}

/// Classify a successful-status response body.
pub fn parse_generate_content_response(data: &Value) -> CompletionOutcome {
    // A blank reply cannot be posted to the chat, so it counts as unusable.
    if let Some(text) = data["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|text| !text.trim().is_empty())
    {
        return CompletionOutcome::Success(text.to_string());
    }

    if let Some(err) = data.get("error") {
        error!(error = %err, "Gemini API error");
        let message = err
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        return CompletionOutcome::ApiError { message };
    }

    error!(body = %data, "Unexpected response structure from Gemini");
    CompletionOutcome::ParseError
}

fn classify_transport_error(endpoint: &str, e: reqwest::Error) -> CompletionOutcome {
    // Never log the error's URL: it carries the key in its query string.
    let e = e.without_url();
    if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
        error!(endpoint, error = %e, "HTTP request to Gemini failed");
        CompletionOutcome::NetworkError
    } else {
        error!(endpoint, error = ?e, "Unexpected failure while calling Gemini");
        CompletionOutcome::InternalError
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, history: &[String]) -> CompletionOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("Gemini API key is not configured");
            return CompletionOutcome::ConfigError;
        };

        let request = GenerateContentRequest::from_history(history);
        match serde_json::to_string(&request) {
            Ok(json) => debug!(endpoint = %self.endpoint, body = %json, "Gemini request"),
            Err(e) => warn!(error = %e, "Could not render Gemini request for logging"),
        }

        let outcome = self.send_request(api_key, &request).await;
        debug!(model = %self.model, outcome = outcome.kind(), "Gemini call finished");
        outcome
    }
}
