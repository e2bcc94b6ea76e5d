use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use deckgen_common::{GenerationResult, ImageQuality, ImageSize};

const API_BASE: &str = "https://api.openai.com/v1";
const IMAGE_MODEL: &str = "dall-e-3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the hosted generation API. One text-completion endpoint, one
/// image-synthesis endpoint, plus a helper that streams a generated resource
/// to local disk.
pub struct OpenAiClient {
    api_key: String,
    http: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Default, Deserialize)]
struct ChatUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    quality: &'a str,
    n: u32,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { api_key, http })
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .post(format!("{API_BASE}/{path}"))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json");
        if let Ok(project) = std::env::var("OPENAI_PROJECT") {
            if !project.is_empty() {
                req = req.header("OpenAI-Project", project);
            }
        }
        if let Ok(org) = std::env::var("OPENAI_ORG") {
            if !org.is_empty() {
                req = req.header("OpenAI-Organization", org);
            }
        }
        req
    }

    /// Runs one chat completion and normalizes the response into a
    /// [`GenerationResult`] with token usage counters.
    pub async fn generate_text(
        &self,
        prompt: &str,
        model: &str,
        temperature: f32,
        max_tokens: Option<u32>,
    ) -> Result<GenerationResult> {
        if prompt.trim().is_empty() {
            bail!("prompt must not be empty");
        }

        let body = ChatRequest {
            model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            temperature,
            max_tokens,
        };
        let resp = self
            .request("chat/completions")
            .json(&body)
            .send()
            .await
            .context("chat completion request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("openai http {status}: {text}");
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .context("failed to parse chat completion response")?;

        let content = parsed.choices.into_iter().next().map(|c| c.message.content);
        let mut usage = BTreeMap::new();
        if let Some(u) = parsed.usage {
            usage.insert("prompt_tokens".to_string(), u.prompt_tokens);
            usage.insert("completion_tokens".to_string(), u.completion_tokens);
            usage.insert("total_tokens".to_string(), u.total_tokens);
        }
        let mut metadata = BTreeMap::new();
        metadata.insert("model".to_string(), model.to_string());

        Ok(GenerationResult {
            content,
            resource_urls: Vec::new(),
            usage,
            metadata,
        })
    }

    /// Runs one image synthesis call and returns the resource URLs in
    /// provider order, plus size/quality/model metadata.
    pub async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
        quality: ImageQuality,
        n: u32,
    ) -> Result<GenerationResult> {
        if prompt.trim().is_empty() {
            bail!("prompt must not be empty");
        }
        if n == 0 {
            bail!("image count must be at least 1");
        }

        let body = ImageRequest {
            model: IMAGE_MODEL,
            prompt,
            size: size.as_str(),
            quality: quality.as_str(),
            n,
        };
        let resp = self
            .request("images/generations")
            .json(&body)
            .send()
            .await
            .context("image generation request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("openai http {status}: {text}");
        }

        let parsed: ImageResponse = resp
            .json()
            .await
            .context("failed to parse image generation response")?;
        let resource_urls: Vec<String> = parsed.data.into_iter().map(|d| d.url).collect();
        if resource_urls.is_empty() {
            bail!("provider returned no image resources");
        }

        let mut metadata = BTreeMap::new();
        metadata.insert("model".to_string(), IMAGE_MODEL.to_string());
        metadata.insert("size".to_string(), size.to_string());
        metadata.insert("quality".to_string(), quality.to_string());

        Ok(GenerationResult {
            content: None,
            resource_urls,
            usage: BTreeMap::new(),
            metadata,
        })
    }

    /// Streams the resource at `url` to `dest`, creating parent directories
    /// as needed. Bounded by the client-wide request timeout.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        let status = resp.status();
        if !status.is_success() {
            bail!("download failed with http {status}");
        }

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::File::create(dest)
            .await
            .with_context(|| format!("failed to create {}", dest.display()))?;
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.context("download stream error")?;
            file.write_all(&bytes).await?;
        }
        file.flush().await?;
        Ok(())
    }
}
