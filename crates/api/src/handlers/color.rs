//! Handler for the color-generation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use moodhue_core::palette::GeneratedPalette;
use moodhue_core::prompt::validate_input_text;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/getColor`.
#[derive(Debug, Deserialize)]
pub struct GetColorRequest {
    /// Free-form text whose mood drives the palette.
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /api/getColor
///
/// Generate a palette for the submitted text. Returns
/// `{ "color": ColorScheme, "koujou"?: string }` on success.
///
/// Missing or empty text is rejected with 400 before any upstream call.
/// Whitespace-only text is forwarded as-is.
/// Upstream and parsing failures are returned as 500 with a flat
/// `{ "error" }` body.
pub async fn get_color(
    State(state): State<AppState>,
    payload: Result<Json<GetColorRequest>, JsonRejection>,
) -> AppResult<Json<GeneratedPalette>> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let text = input.text.unwrap_or_default();
    validate_input_text(&text)?;

    let palette = state.generator.generate(&text).await?;

    tracing::info!(
        text_len = text.len(),
        has_koujou = palette.koujou.is_some(),
        "Palette generated",
    );

    Ok(Json(palette))
}
