//! Ollama chat backend.
//!
//! Talks to `POST {base_url}/api/chat` with streaming disabled and reads the
//! reply from `message.content`.

use super::{BackendError, ChatBackend};
use crate::chat::ChatMessage;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Blocking client for a local Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaBackend {
    /// Create a backend for `base_url`, with an optional request timeout.
    ///
    /// Without a timeout the call blocks until the server answers.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BackendError> {
        // `None` also lifts the blocking client's default 30s limit.
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Unreachable(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

impl ChatBackend for OllamaBackend {
    fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, BackendError> {
        let request = ChatRequest {
            model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(self.chat_url())
            .json(&request)
            .send()
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        parse_chat_response(status.as_u16(), &body)
    }
}

/// Extract the reply text from a successful `/api/chat` response body.
///
/// An `error` field is a rejection even when the status is 2xx.
fn parse_chat_response(status: u16, body: &str) -> Result<String, BackendError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;

    if parsed.error.is_some() {
        return Err(BackendError::Rejected {
            status,
            body: body.to_string(),
        });
    }

    parsed
        .message
        .map(|m| m.content)
        .ok_or_else(|| BackendError::Malformed("response has no message field".to_string()))
}
