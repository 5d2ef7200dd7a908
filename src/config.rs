//! Configuration management for the travel budget estimator
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelBudgetError;
use crate::estimator::DEFAULT_CHILD_COST_FACTOR;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelBudgetConfig {
    /// Cost estimation settings
    #[serde(default)]
    pub estimator: EstimatorConfig,
    /// Destination catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cost estimation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Share of an adult's food cost charged per child, in [0, 1]
    #[serde(default = "default_child_cost_factor")]
    pub child_cost_factor: f64,
}

/// Destination catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog CSV file
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
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
fn default_child_cost_factor() -> f64 {
    DEFAULT_CHILD_COST_FACTOR
}

fn default_catalog_path() -> String {
    "travel-app/malaysia_travel.csv".to_string()
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_request_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            child_cost_factor: default_child_cost_factor(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            request_timeout_seconds: default_request_timeout(),
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

impl TravelBudgetConfig {
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

        // Environment overrides, e.g. TRAVELBUDGET_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("TRAVELBUDGET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelBudgetConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travel-budget").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.catalog.path.is_empty() {
            self.catalog.path = default_catalog_path();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
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
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        let factor = self.estimator.child_cost_factor;
        if !factor.is_finite() || !(0.0..=1.0).contains(&factor) {
            return Err(TravelBudgetError::config(format!(
                "Child cost factor must be between 0 and 1, got {factor}"
            ))
            .into());
        }

        if self.server.port == 0 {
            return Err(TravelBudgetError::config("Server port cannot be 0").into());
        }

        if self.server.request_timeout_seconds > 300 {
            return Err(
                TravelBudgetError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelBudgetError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelBudgetError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TravelBudgetConfig::default();
        assert_eq!(config.estimator.child_cost_factor, 0.6);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TravelBudgetConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_child_factor() {
        let mut config = TravelBudgetConfig::default();
        config.estimator.child_cost_factor = 1.5;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Child cost factor"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TravelBudgetConfig::default();
        config.server.request_timeout_seconds = 500;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = TravelBudgetConfig::default();
        config.catalog.path.clear();
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.catalog.path, "travel-app/malaysia_travel.csv");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[estimator]\nchild_cost_factor = 0.5\n\n[server]\nport = 9090\n\n[catalog]\npath = \"data/catalog.csv\""
        )
        .unwrap();

        let config = TravelBudgetConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.estimator.child_cost_factor, 0.5);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.catalog.path, "data/catalog.csv");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

        let result = TravelBudgetConfig::load_from_path(Some(path));
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            TravelBudgetConfig::load_from_path(Some(PathBuf::from("/nonexistent/config.toml")))
                .unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TravelBudgetConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travel-budget"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
