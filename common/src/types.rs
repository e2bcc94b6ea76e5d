use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One request against the hosted generation API. Created per call and
/// discarded once the result is back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    /// Free-form generation parameters (temperature, size, quality, ...).
    #[serde(default)]
    pub options: serde_json::Map<String, Value>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            options: serde_json::Map::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    pub fn option_f32(&self, key: &str) -> Option<f32> {
        self.options.get(key).and_then(Value::as_f64).map(|v| v as f32)
    }

    pub fn option_u32(&self, key: &str) -> Option<u32> {
        self.options
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }
}

/// Normalized response record returned by every generator. Immutable once
/// returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated text, when the provider returned any.
    pub content: Option<String>,
    /// URLs of generated resources, in provider order.
    pub resource_urls: Vec<String>,
    /// Usage counters (token counts, slide counts, ...).
    pub usage: BTreeMap<String, u64>,
    /// String-valued metadata (model, size, output paths, ...).
    pub metadata: BTreeMap<String, String>,
}

/// Caller-supplied description of one deck page. The JSON form matches the
/// slide config files accepted by the `pptx` subcommand:
///
/// ```json
/// { "type": "title", "text": "AI in Industrial Analytics", "text_color": "white" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SlideSpec {
    Title {
        text: String,
        #[serde(default)]
        text_color: TextColor,
    },
    Chart {
        chart_path: PathBuf,
    },
    Insights {
        title: String,
        points: Vec<String>,
        #[serde(default)]
        text_color: TextColor,
    },
}

impl SlideSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            SlideSpec::Title { .. } => "title",
            SlideSpec::Chart { .. } => "chart",
            SlideSpec::Insights { .. } => "insights",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    White,
    Black,
}

/// Image resolutions accepted by the synthesis endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1024x1024")]
    Square1024,
    #[default]
    #[serde(rename = "1792x1024")]
    Landscape1792,
    #[serde(rename = "1024x1792")]
    Portrait1792,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Square1024 => "1024x1024",
            ImageSize::Landscape1792 => "1792x1024",
            ImageSize::Portrait1792 => "1024x1792",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1024x1024" => Ok(ImageSize::Square1024),
            "1792x1024" => Ok(ImageSize::Landscape1792),
            "1024x1792" => Ok(ImageSize::Portrait1792),
            other => Err(format!(
                "unsupported image size '{other}' (expected 1024x1024, 1792x1024, or 1024x1792)"
            )),
        }
    }
}

/// Image quality tiers accepted by the synthesis endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    #[default]
    Standard,
    Hd,
}

impl ImageQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageQuality::Standard => "standard",
            ImageQuality::Hd => "hd",
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ImageQuality::Standard),
            "hd" => Ok(ImageQuality::Hd),
            other => Err(format!(
                "unsupported image quality '{other}' (expected standard or hd)"
            )),
        }
    }
}
