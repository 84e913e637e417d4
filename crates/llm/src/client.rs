//! HTTP client for an OpenAI-compatible chat completions endpoint.

use std::time::Duration;

use crate::error::LlmError;
use crate::types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model. Must support function calling for structured mode.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for [`OpenAiClient`].
#[derive(Clone)]
pub struct OpenAiSettings {
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Base URL without trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Model name sent with every request.
    pub model: String,
    /// Whole-request timeout for completion calls, in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Chat completions client for a single provider endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    settings: OpenAiSettings,
}

impl OpenAiClient {
    /// Create a client with a fresh [`reqwest::Client`] bounded by
    /// `settings.timeout_secs`. A timed-out call surfaces as
    /// [`LlmError::Request`].
    pub fn new(settings: OpenAiSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, settings)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, mut settings: OpenAiSettings) -> Self {
        settings.base_url = settings.base_url.trim_end_matches('/').to_string();
        Self { client, settings }
    }

    /// Model name this client sends.
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Send a `POST /chat/completions` request.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.settings.base_url))
            .bearer_auth(&self.settings.api_key)
            .json(request)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<ChatCompletionResponse>().await?)
    }

    /// Return the response unchanged on 2xx; otherwise an
    /// [`LlmError::Api`] carrying the provider's error message if the body
    /// has one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.error.message)
            .filter(|m| !m.is_empty());

        tracing::warn!(
            status = status.as_u16(),
            message = message.as_deref().unwrap_or("<none>"),
            "Completion API returned an error status"
        );

        Err(LlmError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
