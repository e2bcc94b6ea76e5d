use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DeckError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "deckgen.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4-turbo-preview".to_string(),
            temperature: 0.7,
            max_tokens: None,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Config {
    /// Reads `deckgen.json` from the working directory (or the path named by
    /// `DECKGEN_CONFIG`) when present, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var("DECKGEN_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Environment overrides beat file values; empty values are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("OPENAI_API_KEY").filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup("DECKGEN_MODEL").filter(|v| !v.is_empty()) {
            self.model = model;
        }
        if let Some(dir) = lookup("DECKGEN_OUTPUT_DIR").filter(|v| !v.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
    }

    /// Pre-flight credential check, run before any network or file work.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                DeckError::Config(
                    "OPENAI_API_KEY is not set; export it or add \"api_key\" to deckgen.json"
                        .to_string(),
                )
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = Config::default();
        let err = config.require_api_key().unwrap_err();
        assert!(matches!(err, DeckError::Config(_)));
    }

    #[test]
    fn empty_api_key_is_a_config_error() {
        let config = Config {
            api_key: Some(String::new()),
            ..Config::default()
        };
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn config_file_fields_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"api_key": "sk-test", "model": "gpt-4o", "output_dir": "artifacts"}}"#
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.require_api_key().unwrap(), "sk-test");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.output_dir, PathBuf::from("artifacts"));
        // Fields absent from the file keep their defaults.
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn env_overrides_beat_file_values() {
        let mut config = Config {
            api_key: Some("sk-file".to_string()),
            model: "gpt-4o".to_string(),
            output_dir: PathBuf::from("file-out"),
            ..Config::default()
        };
        config.apply_overrides(|name| match name {
            "OPENAI_API_KEY" => Some("sk-env".to_string()),
            "DECKGEN_MODEL" => Some("gpt-4.1".to_string()),
            "DECKGEN_OUTPUT_DIR" => Some("env-out".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("sk-env"));
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.output_dir, PathBuf::from("env-out"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = Config {
            api_key: Some("sk-file".to_string()),
            ..Config::default()
        };
        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config.api_key.as_deref(), Some("sk-file"));
        assert_eq!(config.model, "gpt-4-turbo-preview");
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn absent_env_changes_nothing() {
        let mut config = Config {
            api_key: Some("sk-file".to_string()),
            ..Config::default()
        };
        config.apply_overrides(|_| None);
        assert_eq!(config.api_key.as_deref(), Some("sk-file"));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
