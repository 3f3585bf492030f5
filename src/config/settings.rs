//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Completion provider configuration
    pub openai: OpenAIConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// API key; absence is surfaced per request, not at startup
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Completion model name
    pub model: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_env_or_default("SERVER_PORT", "8082")
                    .parse()
                    .context("Invalid port number")?,
            },
            openai: OpenAIConfig {
                // An empty value counts as unset so a blank `.env` entry does
                // not masquerade as a credential
                api_key: std::env::var("OPENAI_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                base_url: get_env_or_default("OPENAI_BASE_URL", "https://api.openai.com/v1"),
                model: get_env_or_default("COMPLETION_MODEL", "text-davinci-003"),
                timeout: get_env_or_default("REQUEST_TIMEOUT", "30")
                    .parse()
                    .context("Invalid timeout value")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        // Validate port range
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        // A configured key must at least look like one
        if let Some(key) = &self.openai.api_key {
            if key.contains(char::is_whitespace) {
                anyhow::bail!("API key cannot contain whitespace characters");
            }

            if key.len() < 8 {
                anyhow::bail!("API key must be at least 8 characters long");
            }
        }

        // Validate URL format
        if !self.openai.base_url.starts_with("http") {
            anyhow::bail!("Invalid provider base URL format, should start with 'http'");
        }

        // Validate model name
        if self.openai.model.is_empty() {
            anyhow::bail!("Completion model name cannot be empty");
        }

        // Validate timeout value
        if self.openai.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Whether a provider credential is configured
    pub fn has_api_key(&self) -> bool {
        self.openai.api_key.is_some()
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> Settings {
        Settings {
            server: ServerConfig {
                host: "localhost".to_string(),
                port: 8080,
            },
            openai: OpenAIConfig {
                api_key: Some("sk-test-key".to_string()),
                base_url: "https://api.openai.com/v1".to_string(),
                model: "text-davinci-003".to_string(),
                timeout: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(base_settings().validate().is_ok());
    }

    #[test]
    fn test_missing_key_is_valid() {
        let mut settings = base_settings();
        settings.openai.api_key = None;

        // A missing credential is a per-request failure, not a config error
        assert!(settings.validate().is_ok());
        assert!(!settings.has_api_key());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let mut settings = base_settings();
        settings.openai.api_key = Some("sk bad".to_string());
        assert!(settings.validate().is_err());

        settings.openai.api_key = Some("short".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut settings = base_settings();
        settings.openai.base_url = "ftp://api.openai.com".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut settings = base_settings();
        settings.openai.timeout = 0;
        assert!(settings.validate().is_err());
    }
}
