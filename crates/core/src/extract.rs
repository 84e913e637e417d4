//! Mapping of raw model output into a [`ColorScheme`].
//!
//! Two shapes of model output are handled:
//!
//! - free text containing `#RRGGBB` codes, assigned positionally with
//!   default fallback ([`palette_from_free_text`]);
//! - a JSON object matching the schema, either as function-call arguments or
//!   embedded in message content ([`parse_structured_output`],
//!   [`extract_json_block`]), with default fallback for missing slots.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::CoreError;
use crate::palette::{slot_keys, ColorScheme, GeneratedPalette, Mode};

/// Regex pattern matching a six-digit hex color code.
pub const HEX_PATTERN: &str = r"#[0-9A-Fa-f]{6}";

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(HEX_PATTERN).expect("valid regex"));

/// Outermost `{ ... }` span, across newlines.
static JSON_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// A JSON object inside a Markdown code fence, optionally tagged `json`.
static FENCED_JSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?[ \t]*\r?\n\s*(\{.*?\})\s*```").expect("valid regex")
});

/// A `koujou: ...` (or `narration: ...`) line, with ASCII or full-width colon.
static NARRATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[\s*\-]*(?:koujou|narration)\s*[:：]\s*(.+?)\s*$").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Free text
// ---------------------------------------------------------------------------

/// All hex color codes in `text`, in first-seen order.
pub fn extract_hex_codes(text: &str) -> Vec<&str> {
    HEX_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Fill a scheme positionally from the hex codes found in `text`.
///
/// Slots without a matching code keep their default color.
pub fn scheme_from_free_text(text: &str) -> ColorScheme {
    ColorScheme::from_slots(extract_hex_codes(text))
}

/// The narrated phrase from a `koujou:` line, if any.
pub fn extract_narration(text: &str) -> Option<String> {
    NARRATION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            m.as_str()
                .trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '「' | '」'))
        })
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Map free-text model output into a palette and optional narration.
pub fn palette_from_free_text(text: &str) -> GeneratedPalette {
    GeneratedPalette {
        color: scheme_from_free_text(text),
        koujou: extract_narration(text),
    }
}

// ---------------------------------------------------------------------------
// Structured output
// ---------------------------------------------------------------------------

/// The JSON object embedded in `text`.
///
/// The body of a Markdown code fence is preferred when one holds an object;
/// otherwise the outermost `{ ... }` span is returned.
pub fn extract_json_block(text: &str) -> Option<&str> {
    if let Some(m) = FENCED_JSON_RE.captures(text).and_then(|caps| caps.get(1)) {
        return Some(m.as_str());
    }
    JSON_BLOCK_RE.find(text).map(|m| m.as_str())
}

/// Parse function-call arguments (or an extracted JSON block) into a palette.
///
/// The arguments must be a JSON object holding at least one of `Light` or
/// `Dark`. Any slot that is missing, `null`, empty or not a string takes its
/// default color. A blank `koujou` is dropped.
pub fn parse_structured_output(json: &str) -> Result<GeneratedPalette, CoreError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| CoreError::ResponseShape(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| CoreError::ResponseShape("arguments are not a JSON object".to_string()))?;
    if !Mode::ALL.iter().any(|mode| object.contains_key(mode.as_str())) {
        return Err(CoreError::ResponseShape(
            "arguments contain neither Light nor Dark".to_string(),
        ));
    }

    let mut color = ColorScheme::default();
    for (mode, role, shade) in slot_keys() {
        let slot = object
            .get(mode.as_str())
            .and_then(|m| m.get(role.as_str()))
            .and_then(|r| r.get(shade.as_str()))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(v) = slot {
            color.set(mode, role, shade, v);
        }
    }

    let koujou = object
        .get("koujou")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(GeneratedPalette { color, koujou })
}

/// Fallback for structured mode when the model answered in content instead
/// of a function call: locate a JSON block and parse it.
pub fn palette_from_json_content(content: &str) -> Result<GeneratedPalette, CoreError> {
    let block = extract_json_block(content).ok_or_else(|| {
        CoreError::ResponseShape("no JSON object found in model output".to_string())
    })?;
    parse_structured_output(block)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::palette::{default_color, Mode, Role, Shade};

    fn full_scheme_json() -> String {
        serde_json::to_string(&ColorScheme::from_slots(
            (0..24).map(|i| format!("#A0B0{i:02X}")),
        ))
        .unwrap()
    }

    // -- extract_hex_codes --

    #[test]
    fn hex_codes_in_first_seen_order() {
        let text = "Prime: #FF0000, accent #00ff00 and finally #0000Ff.";
        assert_eq!(extract_hex_codes(text), vec!["#FF0000", "#00ff00", "#0000Ff"]);
    }

    #[test]
    fn short_and_non_hex_codes_ignored() {
        assert!(extract_hex_codes("#FFF #GGGGGG # 123456").is_empty());
    }

    #[test]
    fn longer_runs_yield_first_six_digits() {
        assert_eq!(extract_hex_codes("#12345678"), vec!["#123456"]);
    }

    // -- scheme_from_free_text --

    #[test]
    fn fewer_codes_than_slots_fall_back_to_defaults() {
        let scheme = scheme_from_free_text("Use #111111 then #222222 then #333333 and #444444");

        assert_eq!(scheme.light.prime.strong, "#111111");
        assert_eq!(scheme.light.prime.standard, "#222222");
        assert_eq!(scheme.light.prime.soft, "#333333");
        assert_eq!(scheme.light.accent.strong, "#444444");
        assert_eq!(
            scheme.light.accent.standard,
            default_color(Mode::Light, Role::Accent, Shade::Standard)
        );
        assert_eq!(
            scheme.dark.text.soft,
            default_color(Mode::Dark, Role::Text, Shade::Soft)
        );
    }

    #[test]
    fn no_codes_yields_default_scheme() {
        assert_eq!(scheme_from_free_text("I cannot do that."), ColorScheme::default());
    }

    // -- extract_narration --

    #[test]
    fn narration_found_on_its_own_line() {
        let text = "#112233\n#445566\nkoujou: A quiet morning by the sea";
        assert_eq!(
            extract_narration(text).as_deref(),
            Some("A quiet morning by the sea")
        );
    }

    #[test]
    fn narration_accepts_full_width_colon_and_quotes() {
        let text = "Koujou：「静かな朝」";
        assert_eq!(extract_narration(text).as_deref(), Some("静かな朝"));
    }

    #[test]
    fn narration_absent_returns_none() {
        assert_eq!(extract_narration("#112233 only colors"), None);
        assert_eq!(extract_narration("koujou:   "), None);
    }

    #[test]
    fn free_text_palette_carries_narration() {
        let palette = palette_from_free_text("#010101\nnarration: Warm and calm");
        assert_eq!(palette.color.light.prime.strong, "#010101");
        assert_eq!(palette.koujou.as_deref(), Some("Warm and calm"));
    }

    // -- extract_json_block --

    #[test]
    fn json_block_extracted_from_code_fence() {
        let text = "Here you go:\n```json\n{\"a\": {\"b\": 1}}\n```\nEnjoy!";
        assert_eq!(extract_json_block(text), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn json_block_missing_returns_none() {
        assert_eq!(extract_json_block("no braces here"), None);
    }

    #[test]
    fn fenced_block_preferred_over_trailing_braces() {
        let text = "```json\n{\"a\": 1}\n```\nUse it like {this}.";
        assert_eq!(extract_json_block(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn untagged_fence_also_recognised() {
        let text = "```\n{\"a\": {\"b\": 2}}\n```";
        assert_eq!(extract_json_block(text), Some("{\"a\": {\"b\": 2}}"));
    }

    // -- parse_structured_output --

    #[test]
    fn well_formed_scheme_parses_unchanged() {
        let json = full_scheme_json();
        let palette = parse_structured_output(&json).unwrap();
        assert_eq!(serde_json::to_string(&palette.color).unwrap(), json);
        assert_eq!(palette.koujou, None);
    }

    #[test]
    fn missing_shade_takes_default() {
        let mut value: serde_json::Value = serde_json::from_str(&full_scheme_json()).unwrap();
        value["Dark"]["text"].as_object_mut().unwrap().remove("soft");

        let palette = parse_structured_output(&value.to_string()).unwrap();
        assert_eq!(
            palette.color.dark.text.soft,
            default_color(Mode::Dark, Role::Text, Shade::Soft)
        );
        assert_eq!(palette.color.dark.text.standard, "#A0B016");
    }

    #[test]
    fn null_and_missing_role_take_defaults() {
        let mut value: serde_json::Value = serde_json::from_str(&full_scheme_json()).unwrap();
        value["Light"]["Prime"]["strong"] = serde_json::Value::Null;
        value["Dark"].as_object_mut().unwrap().remove("Accent");

        let palette = parse_structured_output(&value.to_string()).unwrap();
        assert_eq!(
            palette.color.light.prime.strong,
            default_color(Mode::Light, Role::Prime, Shade::Strong)
        );
        assert_eq!(palette.color.light.prime.standard, "#A0B001");
        for shade in Shade::ALL {
            assert_eq!(
                palette.color.dark.accent.get(shade),
                default_color(Mode::Dark, Role::Accent, shade)
            );
        }
    }

    #[test]
    fn missing_mode_takes_defaults() {
        let mut value: serde_json::Value = serde_json::from_str(&full_scheme_json()).unwrap();
        value.as_object_mut().unwrap().remove("Dark");

        let palette = parse_structured_output(&value.to_string()).unwrap();
        assert_eq!(palette.color.dark, ColorScheme::default().dark);
        assert_eq!(palette.color.light.prime.strong, "#A0B000");
    }

    #[test]
    fn object_without_any_mode_is_a_shape_error() {
        assert_matches!(
            parse_structured_output(r##"{"colors": ["#FFFFFF"]}"##),
            Err(CoreError::ResponseShape(_))
        );
    }

    #[test]
    fn non_object_arguments_are_a_shape_error() {
        assert_matches!(
            parse_structured_output(r##"["#FFFFFF"]"##),
            Err(CoreError::ResponseShape(_))
        );
    }

    #[test]
    fn structured_output_reads_optional_narration() {
        let mut value: serde_json::Value = serde_json::from_str(&full_scheme_json()).unwrap();
        value["koujou"] = serde_json::json!("Soft rain on a tin roof");

        let palette = parse_structured_output(&value.to_string()).unwrap();
        assert_eq!(palette.koujou.as_deref(), Some("Soft rain on a tin roof"));
        assert_eq!(palette.color.light.prime.strong, "#A0B000");
    }

    #[test]
    fn structured_output_blank_narration_dropped() {
        let mut value: serde_json::Value = serde_json::from_str(&full_scheme_json()).unwrap();
        value["koujou"] = serde_json::json!("  ");

        let palette = parse_structured_output(&value.to_string()).unwrap();
        assert_eq!(palette.koujou, None);
    }

    #[test]
    fn invalid_json_is_a_shape_error() {
        assert_matches!(
            parse_structured_output("{not json"),
            Err(CoreError::ResponseShape(_))
        );
    }

    #[test]
    fn json_content_fallback_parses_fenced_object() {
        let content = format!("Sure!\n```json\n{}\n```", full_scheme_json());
        let palette = palette_from_json_content(&content).unwrap();
        assert_eq!(palette.color.dark.text.soft, "#A0B017");
    }

    #[test]
    fn json_content_fallback_without_object_errors() {
        let err = palette_from_json_content("I'm sorry, I can't help.").unwrap_err();
        assert!(err.to_string().contains("no JSON object"));
    }
}
