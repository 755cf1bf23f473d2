//! Application configuration. The API key itself never lives in the file, only the env var naming it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var overriding the config file location
pub const CONFIG_PATH_ENV: &str = "TRAFFIC_RISK_CONFIG_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote scoring service
    pub scoring: ScoringConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base URL of the generative model API
    pub endpoint: String,
    /// Model asked to emulate the classifier
    pub model: String,
    /// Name of the env var holding the API key
    pub api_key_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "API_KEY".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<AppConfig>(&data) {
                Ok(c) => return c,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "config file unreadable as JSON; using defaults")
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config file could not be read; using defaults")
            }
        }
        Self::default()
    }

    /// Load from `$TRAFFIC_RISK_CONFIG_PATH`, falling back to `config.json`.
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.json"));
        Self::load(&path)
    }
}
