//! Shared data types exchanged between the generation client, the core
//! engine, and the CLI.

mod types;

pub use types::{
    GenerationRequest, GenerationResult, ImageQuality, ImageSize, SlideSpec, TextColor,
};
