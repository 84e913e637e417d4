use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moodhue_core::error::CoreError;
use moodhue_llm::LlmError;
use serde_json::json;

/// Message shown for every failure that has no more specific explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch color data.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`LlmError`] for upstream
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent `{ "error", "code" }` JSON responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `moodhue_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure calling the completion API or parsing its output.
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify into HTTP status, error code and user-facing message.
    ///
    /// Input problems map to 400. Every upstream or parsing failure maps to
    /// 500; provider auth (401), rate-limit (429) and access (403) statuses
    /// get specific messages.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::ResponseShape(_) => generation_failed(),
            },

            // --- Upstream errors ---
            AppError::Llm(err) => classify_llm_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Palette generation failed");
        } else {
            tracing::debug!(error = %self, code, "Rejected request");
        }

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn generation_failed() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "GENERATION_FAILED",
        GENERIC_FAILURE_MESSAGE.to_string(),
    )
}

/// Map an upstream error to a status, code and message.
///
/// - 401 -> invalid API key.
/// - 429 -> rate limit exceeded.
/// - 403 -> access denied (usually billing).
/// - Other provider statuses -> the provider's own message.
/// - Transport, empty and malformed output -> generic failure.
fn classify_llm_error(err: &LlmError) -> (StatusCode, &'static str, String) {
    match err {
        LlmError::Api { status: 401, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "UPSTREAM_AUTH",
            "The OpenAI API key is invalid. Check your API key.".to_string(),
        ),
        LlmError::Api { status: 429, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "UPSTREAM_RATE_LIMIT",
            "The OpenAI API rate limit was exceeded. Please try again later.".to_string(),
        ),
        LlmError::Api { status: 403, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "UPSTREAM_FORBIDDEN",
            "Access to the OpenAI API was denied. Check your billing status.".to_string(),
        ),
        LlmError::Api { message, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "UPSTREAM_ERROR",
            format!(
                "OpenAI API error: {}",
                message.as_deref().unwrap_or("unknown error")
            ),
        ),
        LlmError::Request(_) | LlmError::EmptyResponse | LlmError::MalformedOutput(_) => {
            generation_failed()
        }
    }
}
