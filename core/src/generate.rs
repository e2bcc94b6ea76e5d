//! Generator entry points: text, image, and full presentation decks. One
//! capability trait with concrete variants, selected by tagged dispatch in
//! the CLI.

use std::path::PathBuf;
use std::time::Instant;

use async_trait::async_trait;
use tracing::info;

use deckgen_common::{
    GenerationRequest, GenerationResult, ImageQuality, ImageSize, SlideSpec, TextColor,
};
use deckgen_openai::OpenAiClient;

use crate::config::Config;
use crate::deck::DeckBuilder;
use crate::error::{DeckError, Result};

/// Background image filename; reused across runs when already present.
pub const BACKGROUND_FILE: &str = "generated_image.png";
/// Presentation output filename.
pub const PRESENTATION_FILE: &str = "presentation.pptx";

#[async_trait]
pub trait Generator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult>;
}

fn generation_err(err: anyhow::Error) -> DeckError {
    DeckError::Generation(err.to_string())
}

/// Text completion against the hosted API.
pub struct TextGenerator {
    client: OpenAiClient,
    default_temperature: f32,
    default_max_tokens: Option<u32>,
}

impl TextGenerator {
    pub fn new(client: OpenAiClient, config: &Config) -> Self {
        Self {
            client,
            default_temperature: config.temperature,
            default_max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl Generator for TextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let temperature = request
            .option_f32("temperature")
            .unwrap_or(self.default_temperature);
        let max_tokens = request.option_u32("max_tokens").or(self.default_max_tokens);
        self.client
            .generate_text(&request.prompt, &request.model, temperature, max_tokens)
            .await
            .map_err(generation_err)
    }
}

/// Image synthesis; the first returned resource is downloaded to the output
/// directory and all URLs are echoed back.
pub struct ImageGenerator {
    client: OpenAiClient,
    output_dir: PathBuf,
}

impl ImageGenerator {
    pub fn new(client: OpenAiClient, config: &Config) -> Self {
        Self {
            client,
            output_dir: config.output_dir.clone(),
        }
    }
}

#[async_trait]
impl Generator for ImageGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let size = request
            .option_str("size")
            .and_then(|s| s.parse::<ImageSize>().ok())
            .unwrap_or_default();
        let quality = request
            .option_str("quality")
            .and_then(|s| s.parse::<ImageQuality>().ok())
            .unwrap_or_default();
        let count = request.option_u32("n").unwrap_or(1);

        let mut result = self
            .client
            .generate_image(&request.prompt, size, quality, count)
            .await
            .map_err(generation_err)?;

        let url = result
            .resource_urls
            .first()
            .cloned()
            .ok_or_else(|| DeckError::Generation("provider returned no image url".to_string()))?;
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let dest = self.output_dir.join(BACKGROUND_FILE);
        self.client
            .download(&url, &dest)
            .await
            .map_err(generation_err)?;
        info!(path = %dest.display(), "image downloaded");

        result
            .metadata
            .insert("image_path".to_string(), dest.display().to_string());
        Ok(result)
    }
}

/// Assembles a .pptx deck over an AI-generated background image.
pub struct PresentationGenerator {
    client: OpenAiClient,
    output_dir: PathBuf,
    slides: Vec<SlideSpec>,
}

impl PresentationGenerator {
    pub fn new(client: OpenAiClient, config: &Config, slides: Vec<SlideSpec>) -> Self {
        Self {
            client,
            output_dir: config.output_dir.clone(),
            slides,
        }
    }
}

#[async_trait]
impl Generator for PresentationGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let started = Instant::now();
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let background = self.output_dir.join(BACKGROUND_FILE);
        if background.exists() {
            info!(path = %background.display(), "reusing existing background image");
        } else {
            info!("generating new background image");
            let image = self
                .client
                .generate_image(
                    &request.prompt,
                    ImageSize::Landscape1792,
                    ImageQuality::Standard,
                    1,
                )
                .await
                .map_err(generation_err)?;
            let url = image.resource_urls.first().ok_or_else(|| {
                DeckError::Generation("provider returned no image url".to_string())
            })?;
            self.client
                .download(url, &background)
                .await
                .map_err(generation_err)?;
        }

        let mut builder = DeckBuilder::new(&background, &self.output_dir)?;
        for spec in &self.slides {
            builder.push_slide(spec);
        }
        let pptx_path = self.output_dir.join(PRESENTATION_FILE);
        builder.save(&pptx_path)?;
        let report = builder.report();

        let mut result = GenerationResult {
            content: Some(report.summary()),
            ..GenerationResult::default()
        };
        result
            .usage
            .insert("slides_rendered".to_string(), report.rendered() as u64);
        result
            .usage
            .insert("slides_failed".to_string(), report.failed() as u64);
        result
            .metadata
            .insert("image_path".to_string(), background.display().to_string());
        result
            .metadata
            .insert("pptx_path".to_string(), pptx_path.display().to_string());
        result.metadata.insert(
            "total_seconds".to_string(),
            format!("{:.2}", started.elapsed().as_secs_f64()),
        );
        result
            .metadata
            .insert("generated_at".to_string(), chrono::Utc::now().to_rfc3339());
        Ok(result)
    }
}

/// Slide list used when the caller supplies none.
pub fn default_slides() -> Vec<SlideSpec> {
    vec![SlideSpec::Title {
        text: "AI Generated Presentation".to_string(),
        text_color: TextColor::White,
    }]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_slides_is_a_single_white_title() {
        let slides = default_slides();
        assert_eq!(slides.len(), 1);
        match &slides[0] {
            SlideSpec::Title { text, text_color } => {
                assert_eq!(text, "AI Generated Presentation");
                assert_eq!(*text_color, TextColor::White);
            }
            other => panic!("unexpected default slide: {other:?}"),
        }
    }

    #[tokio::test]
    async fn presentation_generator_reuses_an_existing_background() {
        // With the background already on disk, no network call is needed and
        // the deck is assembled offline.
        let dir = tempfile::tempdir().unwrap();
        let background = dir.path().join(BACKGROUND_FILE);
        image::DynamicImage::new_rgba8(1792, 1024)
            .save(&background)
            .unwrap();

        let config = Config {
            output_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let client = OpenAiClient::new("test-key".to_string()).unwrap();
        let generator = PresentationGenerator::new(client, &config, default_slides());
        let request = GenerationRequest::new("industrial skyline", "dall-e-3");

        let result = generator.generate(request).await.unwrap();
        assert_eq!(result.usage.get("slides_rendered"), Some(&1));
        assert_eq!(result.usage.get("slides_failed"), Some(&0));
        assert!(dir.path().join(PRESENTATION_FILE).exists());
        assert_eq!(result.content.as_deref(), Some("1/1 slides rendered"));
    }
}
