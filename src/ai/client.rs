//! Completion endpoint client.
//!
//! `CompletionClient` is the seam between the assessment logic and the
//! hosted completion API: production code uses `OpenAiClient`, tests use
//! `MockCompletionClient`. One request per call — no retries, no internal
//! timeout. Callers needing bounded latency wrap the call with their own
//! deadline and treat expiry as transport failure.

use serde::{Deserialize, Serialize};

use crate::config;

/// Errors from the completion transport. These never escape
/// [`crate::ai::generate_ai_assessment`]; they are folded into the fixed
/// degraded assessment.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("Completion endpoint unreachable at {0}")]
    Connection(String),

    #[error("Completion request timed out")]
    Timeout,

    #[error("Completion endpoint returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed completion payload: {0}")]
    ResponseDecode(String),
}

/// A hosted text-completion endpoint accepting a two-role message list.
pub trait CompletionClient {
    /// Send one system + user exchange, returning the completion's
    /// message text.
    fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}

// ---------------------------------------------------------------------------
// OpenAiClient
// ---------------------------------------------------------------------------

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Client configured from `MEDSAFE_OPENAI_BASE_URL` /
    /// `MEDSAFE_OPENAI_API_KEY`, with the standard endpoint as default.
    pub fn from_env() -> Self {
        Self::new(&config::openai_base_url(), &config::openai_api_key())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Request body for /v1/chat/completions.
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /v1/chat/completions. Only the fields we read.
#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            max_tokens: config::MAX_COMPLETION_TOKENS,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    CompletionError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    CompletionError::Timeout
                } else {
                    CompletionError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::ResponseDecode(e.to_string()))?;

        // An empty choices array degrades to empty text; the parse
        // fallback downstream turns that into a valid assessment.
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// MockCompletionClient
// ---------------------------------------------------------------------------

/// Mock completion client for tests — returns a configured response or
/// simulates a transport failure.
pub struct MockCompletionClient {
    response: String,
    fail_transport: bool,
}

impl MockCompletionClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            fail_transport: false,
        }
    }

    /// Client whose every call fails with a connection error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            fail_transport: true,
        }
    }
}

impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        _model: &str,
        _system: &str,
        _user: &str,
    ) -> Result<String, CompletionError> {
        if self.fail_transport {
            return Err(CompletionError::Connection("http://mock".to_string()));
        }
        Ok(self.response.clone())
    }
}
