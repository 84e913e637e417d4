//! OpenAI-compatible chat-completion client and palette generation.
//!
//! Provides typed request/response wrappers for the `/chat/completions`
//! endpoint, an HTTP client built on [`reqwest`], and the
//! [`PaletteGenerator`] trait the HTTP layer depends on.

pub mod client;
pub mod error;
pub mod generator;
pub mod types;

pub use client::{OpenAiClient, OpenAiSettings};
pub use error::LlmError;
pub use generator::{OpenAiPaletteGenerator, PaletteGenerator, PaletteMode};
