use std::env;
use std::time::Duration;

use tracing::warn;

use crate::errors::InsightError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub youtube_api_key: String,
    pub serp_api_key: String,
    pub gemini_model: String,
    pub temperature: f32,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Missing API keys are tolerated: they are logged and left empty so the
    /// failure shows up on the first request that needs them.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::ConfigError`] when an optional numeric setting
    /// is present but cannot be parsed.
    pub fn from_env() -> Result<Self, InsightError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InsightError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = |name: &str| {
            lookup(name).filter(|v| !v.is_empty()).unwrap_or_else(|| {
                warn!(variable = name, "API key is not set; requests using it will fail");
                String::new()
            })
        };

        let temperature = match lookup("GEMINI_TEMPERATURE") {
            Some(raw) => raw.trim().parse::<f32>().map_err(|e| {
                InsightError::ConfigError(format!("GEMINI_TEMPERATURE: {e}"))
            })?,
            None => DEFAULT_TEMPERATURE,
        };

        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                InsightError::ConfigError(format!("HTTP_TIMEOUT_SECS: {e}"))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            gemini_api_key: api_key("GEMINI_API_KEY"),
            youtube_api_key: api_key("YOUTUBE_API_KEY"),
            serp_api_key: api_key("SERP_API_KEY"),
            gemini_model: lookup("GEMINI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            temperature,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
