//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

use crate::domain::models::publisher::PublisherInfo;

/// SOS service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SosConfig {
    pub url: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl SosConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Identifier naming configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IdentifierConfig {
    pub authority: String,
}

/// Registration run configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    pub manifest_path: String,
    #[serde(default)]
    pub all_procedures: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub sos: SosConfig,
    pub identifiers: IdentifierConfig,
    pub registration: RegistrationConfig,
    pub publisher: PublisherInfo,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read, a required key is
    /// missing, or the publisher section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        let config: Self = Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SOS__URL)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialization alone cannot
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` describing the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.publisher
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid publisher: {e}")))?;

        if self.sos.url.trim().is_empty() {
            return Err(ConfigError::Message("sos.url must not be empty".to_string()));
        }
        Ok(())
    }
}
