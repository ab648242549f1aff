//! Configuration management for the `TripPlanner` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripPlanner` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlannerConfig {
    /// Recommendation provider configuration
    pub provider: ProviderConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Recommendation provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key for the chat-completions provider. Absence is not rejected
    /// here; the provider call fails accordingly at request time.
    pub api_key: Option<String>,
    /// Base URL of the chat-completions API
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_provider_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
    /// Upper bound on generated tokens per response
    #[serde(default = "default_provider_max_tokens")]
    pub max_tokens: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory with the static form page
    #[serde(default = "default_server_assets_dir")]
    pub assets_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_provider_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_provider_model() -> String {
    "google/gemini-2.5-pro".to_string()
}

fn default_provider_timeout() -> u32 {
    60
}

fn default_provider_max_tokens() -> u32 {
    2048
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_server_assets_dir() -> String {
    "assets".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for TripPlannerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                api_key: None,
                base_url: default_provider_base_url(),
                model: default_provider_model(),
                timeout_seconds: default_provider_timeout(),
                max_tokens: default_provider_max_tokens(),
            },
            server: ServerConfig {
                host: default_server_host(),
                port: default_server_port(),
                assets_dir: default_server_assets_dir(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl TripPlannerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPPLANNER_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripPlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripplanner").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.provider.base_url.is_empty() {
            self.provider.base_url = default_provider_base_url();
        }
        if self.provider.model.is_empty() {
            self.provider.model = default_provider_model();
        }
        if self.provider.timeout_seconds == 0 {
            self.provider.timeout_seconds = default_provider_timeout();
        }
        if self.provider.max_tokens == 0 {
            self.provider.max_tokens = default_provider_max_tokens();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.server.assets_dir.is_empty() {
            self.server.assets_dir = default_server_assets_dir();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        // The key is optional at startup; requests without one fail at the
        // provider and are reported through the normal error path.
        if let Some(api_key) = &self.provider.api_key {
            if api_key.is_empty() {
                return Err(TripError::config(
                    "Provider API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(TripError::config(
                    "Provider API key appears to be invalid (too short). Please check your API key."
                ).into());
            }

            if api_key.len() > 200 {
                return Err(TripError::config(
                    "Provider API key appears to be invalid (too long). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.provider.timeout_seconds > 300 {
            return Err(TripError::config(
                "Provider timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.provider.max_tokens > 32_768 {
            return Err(TripError::config(
                "Provider max_tokens cannot exceed 32768"
            ).into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if !self.provider.base_url.starts_with("http://") && !self.provider.base_url.starts_with("https://") {
            return Err(TripError::config(
                "Provider base URL must be a valid HTTP or HTTPS URL"
            ).into());
        }

        if self.provider.model.trim().is_empty() {
            return Err(TripError::config("Provider model identifier cannot be blank").into());
        }

        Ok(())
    }
}
