use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use deckgen_common::{GenerationRequest, GenerationResult, ImageQuality, ImageSize, SlideSpec};
use deckgen_core::config::Config;
use deckgen_core::generate::{
    default_slides, Generator, ImageGenerator, PresentationGenerator, TextGenerator,
};
use deckgen_core::progress::Progress;
use deckgen_openai::OpenAiClient;

#[derive(Debug, Parser)]
#[command(name = "deckgen")]
#[command(about = "AI-powered text, image, and presentation generation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Override model (e.g. gpt-4o, gpt-4-turbo-preview)
    #[arg(long)]
    pub model: Option<String>,

    /// Directory for generated artifacts
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate text from a prompt
    Text {
        prompt: String,
        /// Sampling temperature (0.0-2.0)
        #[arg(long)]
        temperature: Option<f32>,
        /// Maximum tokens to generate
        #[arg(long)]
        max_tokens: Option<u32>,
    },
    /// Generate an image and download it
    Image {
        prompt: String,
        /// Image resolution (1024x1024, 1792x1024, or 1024x1792)
        #[arg(long, default_value = "1792x1024")]
        size: ImageSize,
        /// Image quality (standard or hd)
        #[arg(long, default_value = "standard")]
        quality: ImageQuality,
        /// Number of images to request
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
    /// Assemble a .pptx deck over an AI-generated background
    Pptx {
        /// Background image prompt
        prompt: String,
        /// JSON file with an array of slide specs
        #[arg(long)]
        slides: Option<PathBuf>,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1; help and version output exit clean.
        Err(err) => {
            let code = parse_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };
    init_logging(cli.debug);

    // Credential check happens before any network or file work.
    let mut config = Config::load()?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    let api_key = config.require_api_key()?.to_string();
    let client = OpenAiClient::new(api_key)?;

    match cli.command {
        Commands::Text {
            prompt,
            temperature,
            max_tokens,
        } => {
            let mut request = GenerationRequest::new(prompt, config.model.clone());
            if let Some(t) = temperature {
                request = request.with_option("temperature", t);
            }
            if let Some(m) = max_tokens {
                request = request.with_option("max_tokens", m);
            }
            let generator = TextGenerator::new(client, &config);
            let result = run_generator(&generator, request, "Generating text").await?;
            print_text_result(&result);
        }
        Commands::Image {
            prompt,
            size,
            quality,
            count,
        } => {
            let request = GenerationRequest::new(prompt, "dall-e-3")
                .with_option("size", size.as_str())
                .with_option("quality", quality.as_str())
                .with_option("n", count);
            let generator = ImageGenerator::new(client, &config);
            let result = run_generator(&generator, request, "Generating image").await?;
            print_image_result(&result);
        }
        Commands::Pptx { prompt, slides } => {
            let specs = load_slides(slides.as_deref())?;
            let request = GenerationRequest::new(prompt, "dall-e-3");
            let generator = PresentationGenerator::new(client, &config, specs);
            let result = run_generator(&generator, request, "Building presentation").await?;
            print_deck_result(&result);
        }
    }

    Ok(())
}

async fn run_generator(
    generator: &dyn Generator,
    request: GenerationRequest,
    label: &str,
) -> Result<GenerationResult> {
    let progress = Progress::start(label);
    let result = generator.generate(request).await;
    progress.finish();
    Ok(result?)
}

fn parse_exit_code(err: &clap::Error) -> i32 {
    use clap::error::ErrorKind;
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn load_slides(path: Option<&std::path::Path>) -> Result<Vec<SlideSpec>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read slide config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid slide config {}", path.display()))
        }
        None => Ok(default_slides()),
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn rule() {
    println!("{}", "═".repeat(50));
}

fn print_text_result(result: &GenerationResult) {
    println!("\nText Generation Response:");
    rule();
    println!("{}", result.content.as_deref().unwrap_or("(no content)"));
    rule();
    if !result.usage.is_empty() {
        let usage: Vec<String> = result
            .usage
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        println!("Token Usage: {}", usage.join(", "));
    }
}

fn print_image_result(result: &GenerationResult) {
    println!("\nImage Generation Response:");
    rule();
    for url in &result.resource_urls {
        println!("Image URL: {url}");
    }
    for key in ["size", "quality", "model", "image_path"] {
        if let Some(value) = result.metadata.get(key) {
            println!("{key}: {value}");
        }
    }
    rule();
}

fn print_deck_result(result: &GenerationResult) {
    println!("\nPresentation Response:");
    rule();
    if let Some(summary) = &result.content {
        println!("{summary}");
    }
    for key in ["image_path", "pptx_path", "total_seconds"] {
        if let Some(value) = result.metadata.get(key) {
            println!("{key}: {value}");
        }
    }
    rule();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_map_to_exit_code_one() {
        let err = Cli::try_parse_from(["deckgen", "video", "a prompt"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
        let err = Cli::try_parse_from(["deckgen"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
        let err = Cli::try_parse_from(["deckgen", "text"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
    }

    #[test]
    fn help_and_version_requests_exit_clean() {
        let err = Cli::try_parse_from(["deckgen", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 0);
        let err = Cli::try_parse_from(["deckgen", "text", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 0);
    }

    #[test]
    fn missing_prompt_fails_to_parse() {
        assert!(Cli::try_parse_from(["deckgen", "text"]).is_err());
        assert!(Cli::try_parse_from(["deckgen", "image"]).is_err());
        assert!(Cli::try_parse_from(["deckgen", "pptx"]).is_err());
    }

    #[test]
    fn missing_subcommand_fails_to_parse() {
        assert!(Cli::try_parse_from(["deckgen"]).is_err());
    }

    #[test]
    fn invalid_generation_kind_fails_to_parse() {
        assert!(Cli::try_parse_from(["deckgen", "video", "a prompt"]).is_err());
    }

    #[test]
    fn image_flags_parse_into_the_supported_enums() {
        let cli = Cli::try_parse_from([
            "deckgen", "image", "sunset", "--size", "1024x1792", "--quality", "hd", "-n", "2",
        ])
        .map_err(|e| e.to_string());
        match cli {
            Ok(Cli {
                command:
                    Commands::Image {
                        size,
                        quality,
                        count,
                        ..
                    },
                ..
            }) => {
                assert_eq!(size, ImageSize::Portrait1792);
                assert_eq!(quality, ImageQuality::Hd);
                assert_eq!(count, 2);
            }
            other => panic!("unexpected parse: {:?}", other.is_ok()),
        }
    }

    #[test]
    fn unsupported_image_size_is_rejected() {
        assert!(Cli::try_parse_from(["deckgen", "image", "sunset", "--size", "640x480"]).is_err());
    }

    #[test]
    fn global_flags_parse() {
        let cli = Cli::try_parse_from([
            "deckgen",
            "--debug",
            "--model",
            "gpt-4o",
            "--output-dir",
            "artifacts",
            "text",
            "hello",
        ]);
        match cli {
            Ok(cli) => {
                assert!(cli.debug);
                assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
                assert_eq!(cli.output_dir, Some(PathBuf::from("artifacts")));
            }
            Err(err) => panic!("parse failed: {err}"),
        }
    }
}
