//! Settings loading and confidence-threshold resolution
//!
//! Threshold priority order:
//! 1. Command-line argument (highest priority)
//! 2. `APPCAT_THRESHOLD` environment variable
//! 3. TOML config file (`<config-dir>/appcat/config.toml`)
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default semantic-similarity confidence threshold
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.3;

/// Default per-request HTTP timeout (seconds)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent sent to catalog APIs
pub const DEFAULT_USER_AGENT: &str =
    concat!("appcat/", env!("CARGO_PKG_VERSION"), " (application category analyzer)");

/// Environment variable overriding the confidence threshold
pub const THRESHOLD_ENV_VAR: &str = "APPCAT_THRESHOLD";

/// Runtime settings for the categorizer
#[derive(Debug, Clone)]
pub struct Settings {
    /// Minimum cosine similarity to accept a semantic match (inclusive)
    pub confidence_threshold: f32,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
    /// User-Agent header for catalog requests
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// On-disk settings shape (all fields optional)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileSettings {
    pub confidence_threshold: Option<f32>,
    pub http_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl FileSettings {
    /// Parse a TOML settings file
    pub fn from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

impl Settings {
    /// Resolve settings from CLI argument, environment, and config file.
    ///
    /// Malformed environment or file values are logged and skipped rather
    /// than treated as fatal.
    pub fn load(cli_threshold: Option<f32>) -> Self {
        let env_threshold = std::env::var(THRESHOLD_ENV_VAR).ok();
        let file = default_config_path()
            .filter(|p| p.exists())
            .and_then(|p| match FileSettings::from_path(&p) {
                Ok(f) => Some(f),
                Err(e) => {
                    tracing::warn!("Ignoring config file: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        Self::resolve(cli_threshold, env_threshold.as_deref(), &file)
    }

    /// Pure resolution step, separated from process state for testability
    pub fn resolve(
        cli_threshold: Option<f32>,
        env_threshold: Option<&str>,
        file: &FileSettings,
    ) -> Self {
        let env_parsed = env_threshold.and_then(|raw| match raw.trim().parse::<f32>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(
                    value = %raw,
                    "Ignoring unparseable {} value",
                    THRESHOLD_ENV_VAR
                );
                None
            }
        });

        let confidence_threshold = cli_threshold
            .or(env_parsed)
            .or(file.confidence_threshold)
            .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD);

        Self {
            confidence_threshold,
            http_timeout_secs: file.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: file
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

/// Default configuration file path for the platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("appcat").join("config.toml"))
}
