//! Configuration management for the keyword extractor

use crate::error::{KeywordError, Result};
use crate::processing::extractor::DEFAULT_KEYWORD_COUNT;
use crate::processing::rake::{DEFAULT_MIN_CHAR_LENGTH, DEFAULT_MIN_KEYWORD_FREQ};
use crate::processing::stopwords::StopwordSet;
use crate::processing::tokenizer::DEFAULT_MIN_TOKEN_CHARS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub stopwords: StopwordConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub default_method: String,
    pub default_count: usize,
    pub min_token_chars: usize,
    pub min_char_length: usize,
    pub min_keyword_freq: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwordConfig {
    /// Added to the built-in list
    pub extra: Vec<String>,
    /// Removed from the built-in list
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
    pub score_precision: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_method: "tfidf".to_string(),
            default_count: DEFAULT_KEYWORD_COUNT,
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
            min_char_length: DEFAULT_MIN_CHAR_LENGTH,
            min_keyword_freq: DEFAULT_MIN_KEYWORD_FREQ,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            pretty_json: true,
            score_precision: 4,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| KeywordError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| KeywordError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("persian-keywords")
            .join("config.toml")
    }

    /// Stopword set with the configured additions and exclusions applied
    pub fn stopword_set(&self) -> StopwordSet {
        StopwordSet::with_overrides(&self.stopwords.extra, &self.stopwords.exclude)
    }
}
