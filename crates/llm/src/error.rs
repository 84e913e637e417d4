use moodhue_core::error::CoreError;

/// Errors from calling the completion API or interpreting its output.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Completion API error ({status}): {}", .message.as_deref().unwrap_or("unknown error"))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider error message, when the body carried one.
        message: Option<String>,
    },

    /// The response had no choices, or the first choice had no usable message.
    #[error("Completion API returned no usable message")]
    EmptyResponse,

    /// The message could not be mapped into a color scheme.
    #[error("Malformed model output: {0}")]
    MalformedOutput(#[from] CoreError),
}

impl LlmError {
    /// Upstream HTTP status, for [`LlmError::Api`] only.
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
