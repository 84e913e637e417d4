//! Handlers for the HTML form page.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use moodhue_core::prompt::validate_input_text;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::view::{render_page, PageView};

/// Form fields posted by the page.
#[derive(Debug, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub text: String,
}

/// GET /
///
/// Render the empty form.
pub async fn show_form() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /
///
/// Generate a palette for the submitted text and re-render the page with
/// the swatch tables, or with an error message on failure. The status code
/// matches what the JSON endpoint would return. An unreadable form body is
/// rendered as a 400 page rather than a plain-text rejection.
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<Form<PageForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let form = match payload {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let err = AppError::BadRequest(rejection.body_text());
            return error_page("", &err);
        }
    };

    let outcome = match validate_input_text(&form.text) {
        Ok(()) => state
            .generator
            .generate(&form.text)
            .await
            .map_err(AppError::from),
        Err(e) => Err(AppError::from(e)),
    };

    match outcome {
        Ok(palette) => {
            let html = render_page(&PageView {
                text: &form.text,
                error: None,
                palette: Some(&palette),
            });
            (StatusCode::OK, Html(html))
        }
        Err(err) => error_page(&form.text, &err),
    }
}

/// Re-render the form with the classified message of `err`.
fn error_page(text: &str, err: &AppError) -> (StatusCode, Html<String>) {
    let (status, code, message) = err.classify();
    if status.is_server_error() {
        tracing::error!(error = %err, code, "Palette generation failed");
    } else {
        tracing::debug!(error = %err, code, "Form submission rejected");
    }
    let html = render_page(&PageView {
        text,
        error: Some(&message),
        palette: None,
    });
    (status, Html(html))
}
