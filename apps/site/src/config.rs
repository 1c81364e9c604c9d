use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_API_BASE, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Nothing is required: without `GEMINI_API_KEY` the AI endpoints answer with
/// the missing-credential error and the rest of the site works as usual.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub profile_path: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            profile_path: optional_env("PROFILE_PATH").map(PathBuf::from),
            request_timeout: Duration::from_secs(
                std::env::var("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }

    /// Settings for the AI client, or `None` when no API key is configured.
    pub fn llm_settings(&self) -> Option<LlmSettings> {
        self.gemini_api_key.as_ref().map(|api_key| LlmSettings {
            api_key: api_key.clone(),
            model: self.gemini_model.clone(),
            api_base: self.gemini_api_base.clone(),
            timeout: self.request_timeout,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            profile_path: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Unset and blank values both count as missing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_settings_absent_without_key() {
        assert!(Config::default().llm_settings().is_none());
    }

    #[test]
    fn test_llm_settings_carry_model_and_timeout() {
        let config = Config {
            gemini_api_key: Some("secret".to_string()),
            gemini_model: "gemini-pro".to_string(),
            request_timeout: Duration::from_secs(12),
            ..Default::default()
        };
        let settings = config.llm_settings().unwrap();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.model, "gemini-pro");
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.timeout, Duration::from_secs(12));
    }
}
