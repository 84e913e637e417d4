//! Prompt construction and input validation for palette generation.
//!
//! Provides the user-message templates for both generation strategies and
//! the JSON-schema function declaration used with function calling.

use serde_json::{json, Value};

use crate::error::CoreError;
use crate::palette::{slot_keys, Mode, Role, Shade};

/// Name of the function the model is forced to call in structured mode.
pub const COLOR_SCHEME_FUNCTION: &str = "generate_color_scheme";

/// Description attached to the function declaration.
const COLOR_SCHEME_FUNCTION_DESCRIPTION: &str =
    "Generate a light and dark color scheme that reflects the mood of the given text.";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Input text must be non-empty. Whitespace-only text is passed through.
pub fn validate_input_text(text: &str) -> Result<(), CoreError> {
    if text.is_empty() {
        return Err(CoreError::Validation("Text is required".to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

/// User message for structured (function-calling) generation.
pub fn structured_prompt(text: &str) -> String {
    format!(
        "Create a color scheme based on the mood of the following text, and write a short \
         phrase (koujou) that narrates that mood: \"{text}\""
    )
}

/// User message for free-text generation.
///
/// Lists every slot in canonical order so hex codes in the reply can be
/// assigned positionally.
pub fn free_text_prompt(text: &str) -> String {
    let mut prompt = format!(
        "Read the following text and choose colors that match its mood: \"{text}\"\n\n\
         Answer with exactly one hex color code (#RRGGBB) per line, in this order:\n"
    );
    for (i, (mode, role, shade)) in slot_keys().enumerate() {
        prompt.push_str(&format!(
            "{}. {} {} {}\n",
            i + 1,
            mode.as_str(),
            role.as_str(),
            shade.as_str()
        ));
    }
    prompt.push_str(
        "\nThen add a final line of the form `koujou: <phrase>` with a short phrase \
         narrating the mood. Do not write anything else.",
    );
    prompt
}

// ---------------------------------------------------------------------------
// Function schema
// ---------------------------------------------------------------------------

fn category_schema() -> Value {
    let properties: serde_json::Map<String, Value> = Shade::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), json!({ "type": "string" })))
        .collect();
    let required: Vec<&str> = Shade::ALL.iter().map(|s| s.as_str()).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn mode_schema() -> Value {
    let properties: serde_json::Map<String, Value> = Role::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), category_schema()))
        .collect();
    let required: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// JSON-schema parameters of [`COLOR_SCHEME_FUNCTION`].
///
/// Every mode, role and shade is required; `koujou` is optional.
pub fn color_scheme_parameters() -> Value {
    let mut properties: serde_json::Map<String, Value> = Mode::ALL
        .iter()
        .map(|m| (m.as_str().to_string(), mode_schema()))
        .collect();
    properties.insert(
        "koujou".to_string(),
        json!({
            "type": "string",
            "description": "A short phrase narrating the mood of the text.",
        }),
    );
    let required: Vec<&str> = Mode::ALL.iter().map(|m| m.as_str()).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Full function declaration: `{name, description, parameters}`.
pub fn color_scheme_function() -> Value {
    json!({
        "name": COLOR_SCHEME_FUNCTION,
        "description": COLOR_SCHEME_FUNCTION_DESCRIPTION,
        "parameters": color_scheme_parameters(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
