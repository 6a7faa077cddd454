// Rust guideline compliant 2026-10-19

//! Configuration for embedding applications.
//!
//! Nothing in the library reads configuration implicitly; callers load a
//! [`Config`] explicitly and pass the values they need.

use crate::{Error, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`Config::load`].
pub const CONFIG_FILE: &str = "timestamps.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Settings shared by timestamp services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed UTC offset in minutes for local formatting; `None` uses the host.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,

    /// Default interval for minute-mark boundaries. Must divide 60.
    #[serde(default = "default_minute_mark_interval")]
    pub minute_mark_interval: u32,

    /// Default span length used when partitioning ranges.
    #[serde(default = "default_partition_span")]
    pub partition_span_minutes: i64,

    /// Log level for the tracing subscriber.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_minute_mark_interval() -> u32 {
    5
}

fn default_partition_span() -> i64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            utc_offset_minutes: None,
            minute_mark_interval: default_minute_mark_interval(),
            partition_span_minutes: default_partition_span(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/timestamps.toml`
    /// 3. Environment variables with `TIMESTAMPS_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory containing the configuration file
    ///
    /// # Returns
    ///
    /// A validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(path = %config_path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `TIMESTAMPS_UTC_OFFSET_MINUTES` - Fixed offset in minutes, or `local`
    /// - `TIMESTAMPS_MINUTE_MARK_INTERVAL` - Minute-mark interval
    /// - `TIMESTAMPS_PARTITION_SPAN_MINUTES` - Partition span length
    /// - `TIMESTAMPS_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are not numbers where
    /// numbers are expected.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TIMESTAMPS_UTC_OFFSET_MINUTES") {
            self.utc_offset_minutes = if val.eq_ignore_ascii_case("local") {
                None
            } else {
                Some(val.parse().map_err(|_| {
                    Error::Config(
                        "TIMESTAMPS_UTC_OFFSET_MINUTES must be a number of minutes or 'local'"
                            .to_string(),
                    )
                })?)
            };
        }

        if let Ok(val) = std::env::var("TIMESTAMPS_MINUTE_MARK_INTERVAL") {
            self.minute_mark_interval = val.parse().map_err(|_| {
                Error::Config("TIMESTAMPS_MINUTE_MARK_INTERVAL must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TIMESTAMPS_PARTITION_SPAN_MINUTES") {
            self.partition_span_minutes = val.parse().map_err(|_| {
                Error::Config("TIMESTAMPS_PARTITION_SPAN_MINUTES must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TIMESTAMPS_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the offset is a day or more away from UTC
    /// - minute_mark_interval does not divide 60
    /// - partition_span_minutes is not positive
    /// - log_level is unknown
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_minutes.is_some() && self.fixed_offset().is_none() {
            return Err(Error::Config(format!(
                "utc_offset_minutes must be within a day of UTC, got {:?}",
                self.utc_offset_minutes
            )));
        }

        if self.minute_mark_interval == 0 || 60 % self.minute_mark_interval != 0 {
            return Err(Error::Config(format!(
                "minute_mark_interval must divide 60, got {}",
                self.minute_mark_interval
            )));
        }

        if self.partition_span_minutes <= 0 {
            return Err(Error::Config(
                "partition_span_minutes must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Returns the configured fixed offset, if any and if valid.
    #[must_use]
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|minutes| minutes.checked_mul(60))
            .and_then(FixedOffset::east_opt)
    }

    /// Saves the configuration to `<dir>/timestamps.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
