use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    /// Missing or unusable configuration. Fatal, raised before any work
    /// begins.
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider or network failure, original message preserved. The caller
    /// decides whether to retry; no retry logic exists here.
    #[error("generation failed: {0}")]
    Generation(String),

    /// Per-slide rendering failure. Caught by the layout engine; the slide is
    /// left partially rendered and the deck continues.
    #[error("failed to render {kind} slide: {message}")]
    Render { kind: &'static str, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
