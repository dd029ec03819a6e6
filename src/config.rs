//! User configuration
//!
//! Read from `~/.config/lexicard/config.toml` (or `--config`). A missing
//! file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flashcards::DEFAULT_SWIPE_THRESHOLD;
use crate::services::{
    CommandSpeech, ImageProvider, NoImages, QueryUrlImages, SilentSpeech, SpeechSynthesizer,
};
use crate::words::Level;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the personal dictionary lives; defaults to the local data dir
    pub data_dir: Option<PathBuf>,
    /// Level filter selected at startup
    pub default_level: Level,
    pub speech: SpeechConfig,
    pub images: ImagesConfig,
    pub flashcards: FlashcardConfig,
    pub quiz: QuizConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Program to run; no program means silent
    pub command: Option<String>,
    pub args: Vec<String>,
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// URL with a `{query}` placeholder; unset means no images
    pub url_template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardConfig {
    pub swipe_threshold: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub trim_answers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_level: Level::All,
            speech: SpeechConfig::default(),
            images: ImagesConfig::default(),
            flashcards: FlashcardConfig::default(),
            quiz: QuizConfig::default(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: vec!["{text}".to_string()],
            language: "en-US".to_string(),
        }
    }
}

impl Default for FlashcardConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl Config {
    /// Returns the path to the default configuration file.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lexicard").join("config.toml")
    }

    /// Loads configuration from `path`, or the default path when `None`.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;

        Self::parse(&content, &path)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.flashcards.swipe_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::Validation {
                message: format!("flashcards.swipe_threshold must be positive, got {}", threshold),
            });
        }

        if let Some(command) = &self.speech.command {
            if command.trim().is_empty() {
                return Err(ConfigError::Validation {
                    message: "speech.command must not be empty".to_string(),
                });
            }
            if !self.speech.args.iter().any(|a| a.contains("{text}")) {
                return Err(ConfigError::Validation {
                    message: "speech.args must contain a {text} placeholder".to_string(),
                });
            }
        }

        if let Some(template) = &self.images.url_template {
            if !template.contains("{query}") {
                return Err(ConfigError::Validation {
                    message: "images.url_template must contain a {query} placeholder".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn speech_synthesizer(&self) -> Box<dyn SpeechSynthesizer> {
        match &self.speech.command {
            Some(command) => Box::new(CommandSpeech::new(command.clone(), self.speech.args.clone())),
            None => Box::new(SilentSpeech),
        }
    }

    pub fn image_provider(&self) -> Box<dyn ImageProvider> {
        match &self.images.url_template {
            Some(template) => Box::new(QueryUrlImages::new(template.clone())),
            None => Box::new(NoImages),
        }
    }
}
