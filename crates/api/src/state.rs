use std::sync::Arc;

use moodhue_llm::PaletteGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Palette generator backed by the completion API (stubbed in tests).
    pub generator: Arc<dyn PaletteGenerator>,
}
