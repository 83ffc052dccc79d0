//! Application settings and configuration management

use crate::news::{DEFAULT_NEWS_ENDPOINT, NEWS_PAGE_SIZE, NEWS_TAG};
use crate::playback::PROGRESS_UPDATE_INTERVAL;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "https://www.youtube.com/watch?v=KySOP1wtF7o";

/// Application settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Media source driving the widget
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Article listing endpoint
    #[serde(default = "default_news_endpoint")]
    pub news_endpoint: String,
    /// Tag requested from the article listing
    #[serde(default = "default_news_tag")]
    pub news_tag: String,
    /// Headlines requested (at most 5)
    #[serde(default = "default_news_page_size")]
    pub news_page_size: usize,
    /// Whether to read the feed at startup
    #[serde(default = "default_true")]
    pub news_enabled: bool,
    /// Cadence of player progress callbacks while playing
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,
    /// Distance covered by the skip buttons
    #[serde(default = "default_skip_seconds")]
    pub skip_seconds: f64,
    /// Length of the simulated media
    #[serde(default = "default_simulated_duration_secs")]
    pub simulated_duration_secs: f64,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_news_endpoint() -> String {
    DEFAULT_NEWS_ENDPOINT.to_string()
}

fn default_news_tag() -> String {
    NEWS_TAG.to_string()
}

fn default_news_page_size() -> usize {
    NEWS_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

fn default_progress_interval_ms() -> u64 {
    PROGRESS_UPDATE_INTERVAL.as_millis() as u64
}

fn default_skip_seconds() -> f64 {
    10.0
}

fn default_simulated_duration_secs() -> f64 {
    240.0
}

/// Error types for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    ParseError(String),
    ValidationError(String),
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::ParseError(s) => write!(f, "Parse error: {}", s),
            ConfigError::ValidationError(s) => write!(f, "Validation error: {}", s),
        }
    }
}

impl Error for ConfigError {}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source_url: default_source_url(),
            news_endpoint: default_news_endpoint(),
            news_tag: default_news_tag(),
            news_page_size: default_news_page_size(),
            news_enabled: true,
            progress_interval_ms: default_progress_interval_ms(),
            skip_seconds: default_skip_seconds(),
            simulated_duration_secs: default_simulated_duration_secs(),
        }
    }
}

impl Settings {
    /// Load settings from a file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(&self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("lost-sounds").join("config.json")
    }

    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_url.trim().is_empty() {
            return Err(ConfigError::ValidationError("Source URL cannot be empty".to_string()));
        }

        if let Err(e) = url::Url::parse(&self.news_endpoint) {
            return Err(ConfigError::ValidationError(format!(
                "News endpoint '{}' is not a valid URL: {}",
                self.news_endpoint, e
            )));
        }

        if self.news_page_size == 0 || self.news_page_size > NEWS_PAGE_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "News page size must be between 1 and {}",
                NEWS_PAGE_SIZE
            )));
        }

        if self.progress_interval_ms == 0 {
            return Err(ConfigError::ValidationError("Progress interval must be positive".to_string()));
        }

        if !(self.skip_seconds > 0.0) || !self.skip_seconds.is_finite() {
            return Err(ConfigError::ValidationError("Skip distance must be a positive number of seconds".to_string()));
        }

        if !(self.simulated_duration_secs > 0.0) || !self.simulated_duration_secs.is_finite() {
            return Err(ConfigError::ValidationError("Simulated duration must be positive".to_string()));
        }

        Ok(())
    }
}
