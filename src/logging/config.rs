//! Configuration for the logging system
//!
//! Defaults can be overridden from environment variables at startup.

use log::LevelFilter;

use super::LoggingError;

pub const LEVEL_ENV: &str = "SCHEMA_BUILDER_LOG_LEVEL";
pub const COLORS_ENV: &str = "SCHEMA_BUILDER_LOG_COLORS";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default log level for all modules
    pub default_level: String,
    /// Enable colored output
    pub enable_colors: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "INFO".to_string(),
            enable_colors: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LEVEL_ENV) {
            self.default_level = level;
        }
        if let Some(colors) = lookup(COLORS_ENV) {
            self.enable_colors = colors.parse().unwrap_or(true);
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, LoggingError> {
        match self.default_level.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(LevelFilter::Trace),
            "DEBUG" => Ok(LevelFilter::Debug),
            "INFO" => Ok(LevelFilter::Info),
            "WARN" => Ok(LevelFilter::Warn),
            "ERROR" => Ok(LevelFilter::Error),
            "OFF" => Ok(LevelFilter::Off),
            other => Err(LoggingError::Config(format!("Invalid log level: {}", other))),
        }
    }
}
