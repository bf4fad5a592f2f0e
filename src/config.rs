//! Session configuration.

use crate::engine::EngineSettings;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Environment variable that overrides the configured service URL.
pub const SERVICE_URL_ENV: &str = "DESDEMONA_SERVICE_URL";

/// Configuration for one client session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Base URL of the decision service.
    #[serde(default = "default_service_url")]
    service_url: String,

    /// Bot search difficulty; at least 1.
    #[serde(default = "default_difficulty")]
    difficulty: u32,

    /// Per-request timeout in milliseconds. 0 disables the timeout.
    #[serde(default = "default_request_timeout_ms")]
    request_timeout_ms: u64,

    /// Pause between flip waves in milliseconds.
    #[serde(default = "default_wave_pause_ms")]
    wave_pause_ms: u64,

    /// Duration of one disk flip in milliseconds.
    #[serde(default = "default_flip_duration_ms")]
    flip_duration_ms: u64,
}

fn default_service_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_difficulty() -> u32 {
    3
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_wave_pause_ms() -> u64 {
    200
}

fn default_flip_duration_ms() -> u64 {
    300
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            difficulty: default_difficulty(),
            request_timeout_ms: default_request_timeout_ms(),
            wave_pause_ms: default_wave_pause_ms(),
            flip_duration_ms: default_flip_duration_ms(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(service_url = %config.service_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise starts from defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file; using defaults");
            Ok(Self::default())
        }
    }

    /// Applies the service URL from the environment, if set.
    #[instrument(skip(self))]
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(SERVICE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                debug!(%url, "Service URL overridden from environment");
                self.with_service_url(url)
            }
            _ => self,
        }
    }

    /// Replaces the service URL.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Replaces the bot difficulty.
    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replaces both animation timings.
    pub fn with_timings(mut self, wave_pause_ms: u64, flip_duration_ms: u64) -> Self {
        self.wave_pause_ms = wave_pause_ms;
        self.flip_duration_ms = flip_duration_ms;
        self
    }

    /// Checks the values a session cannot run with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.difficulty == 0 {
            return Err(ConfigError::new("difficulty must be at least 1".to_string()));
        }
        let url = self.service_url.trim();
        if url.is_empty() {
            return Err(ConfigError::new("service_url must not be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            warn!(%url, "Rejected service URL");
            return Err(ConfigError::new(format!(
                "service_url must be an http(s) URL, got {}",
                url
            )));
        }
        Ok(())
    }

    /// Request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }

    /// Time one flip animation takes.
    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_duration_ms)
    }

    /// The subset of settings the engine consumes.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::new(self.difficulty, Duration::from_millis(self.wave_pause_ms))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
