// src/client.rs

use crate::config::get_config;
use crate::constants::{CHAT_ENDPOINT, RESET_ENDPOINT};
use crate::errors::{FinanceAiError, FinanceAiResult};
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// HTTP wrapper around the assistant backend. The base URL is injected so
/// tests can point the client at a local mock server. Requests are never
/// retried and carry no client-side timeout.
#[derive(Debug)]
pub struct AssistantClient {
    http: Client,
    base_url: String,
}

impl AssistantClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(get_config().base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one user message and returns the assistant reply text.
    pub async fn chat(&self, message: &str) -> FinanceAiResult<String> {
        let started = Instant::now();
        let response = self
            .http
            .post(format!("{}{}", self.base_url, CHAT_ENDPOINT))
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            info!(
                "{} - chat - status {} - {}ms",
                CHAT_ENDPOINT,
                status,
                started.elapsed().as_millis()
            );
            return Err(FinanceAiError::server_error(status, body));
        }

        let parsed: ChatResponse = response.json().await?;
        debug!(
            "{} - chat - status {} - {}ms - {} chars",
            CHAT_ENDPOINT,
            status,
            started.elapsed().as_millis(),
            parsed.response.len()
        );
        Ok(parsed.response)
    }

    /// Asks the backend to drop its conversation state. The response body
    /// is ignored; callers treat failure as non-fatal.
    pub async fn reset(&self) -> FinanceAiResult<()> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, RESET_ENDPOINT))
            .send()
            .await?;

        let status = response.status();
        info!("{} - reset - status {}", RESET_ENDPOINT, status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FinanceAiError::server_error(status, body));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn chat_returns_reply_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({ "message": "hi" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "Hello Alex!" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = AssistantClient::new(server.uri());
        assert_eq!(client.chat("hi").await.unwrap(), "Hello Alex!");
    }

    #[tokio::test]
    async fn chat_maps_non_success_status_to_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(500).set_body_string("agent exploded"))
            .mount(&server)
            .await;

        let client = AssistantClient::new(server.uri());
        match client.chat("hi").await {
            Err(FinanceAiError::Server { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "agent exploded");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn chat_maps_malformed_body_to_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = AssistantClient::new(server.uri());
        assert!(matches!(
            client.chat("hi").await,
            Err(FinanceAiError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn chat_maps_unreachable_backend_to_transport_error() {
        let client = AssistantClient::new("http://127.0.0.1:9");
        assert!(matches!(
            client.chat("hi").await,
            Err(FinanceAiError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn reset_succeeds_on_2xx_and_ignores_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/reset"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success", "message": "reset" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = AssistantClient::new(server.uri());
        assert!(client.reset().await.is_ok());
    }

    #[tokio::test]
    async fn reset_reports_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/reset"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = AssistantClient::new(server.uri());
        assert!(matches!(
            client.reset().await,
            Err(FinanceAiError::Server { .. })
        ));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = AssistantClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
