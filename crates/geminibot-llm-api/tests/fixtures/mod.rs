use std::time::Duration;

use geminibot_llm_api::{GeminiClient, GeminiConfig};
use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-test";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// Mock server utilities for testing the Gemini client
pub struct GeminiMockServer {
    server: MockServer,
}

impl GeminiMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Client pointed at this server
    pub fn client(&self) -> GeminiClient {
        self.client_with(Some(TEST_API_KEY.to_string()), Duration::from_secs(5))
    }

    pub fn client_with(&self, api_key: Option<String>, timeout: Duration) -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_key,
            model: TEST_MODEL.to_string(),
            base_url: self.uri(),
            timeout,
        })
        .expect("client should build")
    }

    /// Mock a successful candidate reply, expecting exactly one call
    pub async fn mock_success(&self, reply: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", TEST_API_KEY))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "parts": [{"text": reply}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a bare status code with a JSON error body
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "code": status,
                    "message": "Resource has been exhausted",
                    "status": "RESOURCE_EXHAUSTED"
                }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an arbitrary 200 body
    pub async fn mock_body(&self, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_raw_body(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a reply that arrives after `delay`
    pub async fn mock_slow(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(delay)
                    .set_body_json(json!({"candidates": []})),
            )
            .mount(&self.server)
            .await;
    }

    /// Fail the test on drop if any request reaches the server
    pub async fn expect_no_calls(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn request_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.body_json::<serde_json::Value>().expect("request body should be JSON"))
            .collect()
    }
}
