//! Domain types and pure logic for mood-derived color palettes.
//!
//! Nothing in this crate performs I/O: it defines the palette schema,
//! builds prompts, and maps model output text into a [`palette::ColorScheme`].

pub mod error;
pub mod extract;
pub mod palette;
pub mod prompt;
