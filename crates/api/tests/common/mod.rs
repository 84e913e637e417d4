#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use moodhue_api::config::ServerConfig;
use moodhue_api::router::build_app_router;
use moodhue_api::state::AppState;
use moodhue_core::error::CoreError;
use moodhue_core::palette::{ColorScheme, GeneratedPalette};
use moodhue_llm::{LlmError, OpenAiSettings, PaletteGenerator, PaletteMode};

// ---------------------------------------------------------------------------
// Stub generator
// ---------------------------------------------------------------------------

/// What the stub returns on every call.
#[derive(Clone)]
pub enum StubOutcome {
    Palette(GeneratedPalette),
    Api { status: u16, message: Option<String> },
    Empty,
    Malformed,
}

/// A [`PaletteGenerator`] that returns a canned outcome and counts calls.
pub struct StubGenerator {
    outcome: StubOutcome,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn new(outcome: StubOutcome) -> Arc<Self> {
        Self::delayed(outcome, Duration::ZERO)
    }

    /// A stub that sleeps for `delay` before answering.
    pub fn delayed(outcome: StubOutcome, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn returning(palette: GeneratedPalette) -> Arc<Self> {
        Self::new(StubOutcome::Palette(palette))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaletteGenerator for StubGenerator {
    async fn generate(&self, _text: &str) -> Result<GeneratedPalette, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        match &self.outcome {
            StubOutcome::Palette(p) => Ok(p.clone()),
            StubOutcome::Api { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            StubOutcome::Empty => Err(LlmError::EmptyResponse),
            StubOutcome::Malformed => Err(LlmError::MalformedOutput(CoreError::ResponseShape(
                "missing field `Dark`".to_string(),
            ))),
        }
    }
}

/// A palette with distinct values in every slot.
pub fn sample_palette() -> GeneratedPalette {
    GeneratedPalette {
        color: ColorScheme::from_slots((0..24).map(|i| format!("#5A{i:02X}A5"))),
        koujou: Some("Quiet waves under a pale moon".to_string()),
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 1-second upstream timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        openai: OpenAiSettings {
            api_key: "sk-test".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            model: "gpt-test".to_string(),
            timeout_secs: 1,
        },
        palette_mode: PaletteMode::Structured,
    }
}

/// Build the full application router around the given generator, through
/// the same builder `main.rs` uses.
pub fn build_test_app(generator: Arc<StubGenerator>) -> Router {
    build_app_with(generator, test_config())
}

/// Build the router around any generator and configuration.
pub fn build_app_with(generator: Arc<dyn PaletteGenerator>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        generator,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    post_raw(app, uri, "application/x-www-form-urlencoded", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: String,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
