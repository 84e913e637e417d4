pub mod health;
pub mod page;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /getColor                                        generate palette (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/getColor", post(handlers::color::get_color))
}
