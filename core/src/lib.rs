//! Core engine: image compositing, overlay generation, slide layout, pptx
//! assembly, and the generator entry points wrapping the hosted API.

pub mod compose;
pub mod config;
pub mod deck;
pub mod error;
pub mod generate;
pub mod overlay;
pub mod pptx;
pub mod progress;

pub use error::{DeckError, Result};
