//! Palette generation on top of the completion client.
//!
//! [`PaletteGenerator`] is the seam the HTTP layer depends on.
//! [`OpenAiPaletteGenerator`] implements it with one completion call per
//! request, using either function calling or free-text parsing depending on
//! [`PaletteMode`].

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use moodhue_core::extract::{
    palette_from_free_text, palette_from_json_content, parse_structured_output,
};
use moodhue_core::palette::GeneratedPalette;
use moodhue_core::prompt::{
    color_scheme_function, free_text_prompt, structured_prompt, COLOR_SCHEME_FUNCTION,
};

use crate::client::OpenAiClient;
use crate::error::LlmError;
use crate::types::{
    force_function, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Tool,
};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// How model output is obtained and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Forced function call returning schema-conforming JSON.
    #[default]
    Structured,
    /// Plain completion; hex codes are extracted by regex.
    FreeText,
}

impl PaletteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteMode::Structured => "structured",
            PaletteMode::FreeText => "free_text",
        }
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" | "function" => Ok(PaletteMode::Structured),
            "free_text" | "free-text" | "text" => Ok(PaletteMode::FreeText),
            other => Err(format!(
                "Unknown palette mode '{other}' (expected 'structured' or 'free_text')"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Produces a palette for a piece of text.
#[async_trait]
pub trait PaletteGenerator: Send + Sync {
    /// Generate a palette for `text`. Callers validate `text` beforehand.
    async fn generate(&self, text: &str) -> Result<GeneratedPalette, LlmError>;
}

// ---------------------------------------------------------------------------
// OpenAI implementation
// ---------------------------------------------------------------------------

pub struct OpenAiPaletteGenerator {
    client: OpenAiClient,
    mode: PaletteMode,
}

impl OpenAiPaletteGenerator {
    pub fn new(client: OpenAiClient, mode: PaletteMode) -> Self {
        Self { client, mode }
    }

    pub fn mode(&self) -> PaletteMode {
        self.mode
    }

    /// Build the completion request for `text` in the configured mode.
    pub fn build_request(&self, text: &str) -> ChatCompletionRequest {
        build_request(self.client.model(), self.mode, text)
    }
}

#[async_trait]
impl PaletteGenerator for OpenAiPaletteGenerator {
    async fn generate(&self, text: &str) -> Result<GeneratedPalette, LlmError> {
        let request = self.build_request(text);

        tracing::debug!(
            model = self.client.model(),
            mode = %self.mode,
            text_len = text.len(),
            "Requesting palette completion"
        );

        let response = self.client.chat_completion(&request).await?;
        palette_from_response(self.mode, &response)
    }
}

/// Completion request for `text` in `mode`.
pub fn build_request(model: &str, mode: PaletteMode, text: &str) -> ChatCompletionRequest {
    match mode {
        PaletteMode::Structured => ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user(structured_prompt(text))],
            tools: Some(vec![Tool::function(color_scheme_function())]),
            tool_choice: Some(force_function(COLOR_SCHEME_FUNCTION)),
        },
        PaletteMode::FreeText => ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user(free_text_prompt(text))],
            tools: None,
            tool_choice: None,
        },
    }
}

/// Map a completion response into a palette.
///
/// Structured mode reads the function-call arguments, falling back to a JSON
/// block in the message content. Free-text mode extracts hex codes from the
/// content and fills the rest with defaults.
pub fn palette_from_response(
    mode: PaletteMode,
    response: &ChatCompletionResponse,
) -> Result<GeneratedPalette, LlmError> {
    let message = response.first_message().ok_or(LlmError::EmptyResponse)?;

    match mode {
        PaletteMode::Structured => {
            if let Some(args) = message.function_arguments() {
                return Ok(parse_structured_output(args)?);
            }
            let content = message.text().ok_or(LlmError::EmptyResponse)?;
            tracing::warn!("Model answered without a function call, parsing content as JSON");
            Ok(palette_from_json_content(content)?)
        }
        PaletteMode::FreeText => {
            let content = message.text().ok_or(LlmError::EmptyResponse)?;
            Ok(palette_from_free_text(content))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
