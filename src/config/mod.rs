//! Configuration module for Itinera
//!
//! Provides layered configuration loading from files, environment variables,
//! and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`ITINERA_*`, `GEMINI_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use itinera::config::PlannerConfig;
//!
//! // Load defaults
//! let config = PlannerConfig::default();
//! assert_eq!(config.server.port, 8000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [server]
//! port = 9000
//! "#;
//! let config: PlannerConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```

pub mod error;
pub mod gemini;
pub mod logging;
pub mod server;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the Itinera server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlannerConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Generation provider configuration
    pub gemini: GeminiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl PlannerConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (defaults are kept). The API key
    /// is environment-only and never read from the config file.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("ITINERA_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("ITINERA_HOST") {
            self.server.host = host;
        }

        if let Ok(level) = std::env::var("ITINERA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ITINERA_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                self.gemini.api_key = Some(key.trim().to_string());
            }
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.trim().is_empty() {
                self.gemini.preferred_model = Some(model.trim().to_string());
            }
        }
        if let Ok(version) = std::env::var("GEMINI_API_VERSION") {
            if !version.trim().is_empty() {
                self.gemini.api_version = version.trim().to_string();
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.gemini.base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "gemini.base_url".to_string(),
                message: "base URL cannot be empty".to_string(),
            });
        }

        if self.gemini.api_version.is_empty() {
            return Err(ConfigError::Validation {
                field: "gemini.api_version".to_string(),
                message: "API version cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
