//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Gemini API client configuration
///
/// The API key is read from configuration or, failing that, from the
/// `GEMINI_API_KEY` environment variable at load time. A missing key is
/// not a startup error: every generation attempt fails with a
/// configuration error until the process is restarted with a valid key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_request_timeout")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_request_timeout() -> u64 {
    120000
}

/// Fan-out orchestrator configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrchestratorConfig {
    /// Maximum number of concurrent per-style calls. 0 means unbounded:
    /// one outbound request per selected style, all in flight at once.
    #[serde(default)]
    pub max_concurrent: usize,
    /// Timeout applied to each per-style call, in milliseconds
    #[serde(default = "default_style_timeout")]
    pub per_style_timeout_ms: u64,
}

fn default_style_timeout() -> u64 {
    120000
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("orchestrator.max_concurrent", 0)?
            .set_default("orchestrator.per_style_timeout_ms", 120000)?
            // Load from configuration file
            .add_source(File::with_name(path.as_ref().to_str().unwrap_or("config/default")).required(false))
            // Override with environment variables (prefixed with POSTER_)
            .add_source(
                Environment::with_prefix("POSTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        // The credential also comes in via the conventional variable name
        if settings.gemini.api_key.is_none() {
            settings.gemini.api_key = std::env::var("GEMINI_API_KEY").ok();
        }

        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.gemini.base_url.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Gemini base URL cannot be empty".to_string(),
            )));
        }

        if self.gemini.model.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Gemini model cannot be empty".to_string(),
            )));
        }

        if self.orchestrator.per_style_timeout_ms == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Per-style timeout cannot be 0".to_string(),
            )));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gemini: GeminiConfig::default(),
            orchestrator: OrchestratorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: default_request_timeout(),
        }
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 0,
            per_style_timeout_ms: default_style_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.orchestrator.max_concurrent, 0);
        assert_eq!(settings.gemini.model, "gemini-2.5-flash-image");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.orchestrator.per_style_timeout_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut settings = Settings::default();
        settings.gemini.model = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_default_settings_pass_validation() {
        assert!(Settings::default().validate().is_ok());
    }
}
