use axum::routing::get;
use axum::Router;

use crate::handlers::page;
use crate::state::AppState;

/// HTML page routes, mounted at the root.
///
/// ```text
/// GET    /           -> show_form
/// POST   /           -> submit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(page::show_form).post(page::submit_form))
}
