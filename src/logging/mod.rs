//! # Logging
//!
//! Installs an `env_logger` backend for the `log` facade, configured from
//! [`LogConfig`].

pub mod config;

pub use config::LogConfig;

use env_logger::WriteStyle;

/// Initialize logging with configuration read from the environment.
pub fn init() -> Result<(), LoggingError> {
    init_with_config(&LogConfig::from_env())
}

/// Initialize logging with a custom configuration.
pub fn init_with_config(config: &LogConfig) -> Result<(), LoggingError> {
    let level = config.level_filter()?;
    let style = if config.enable_colors {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    };
    env_logger::Builder::new()
        .filter_level(level)
        .write_style(style)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// Logging system errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logging system already initialized")]
    AlreadyInitialized,
    #[error("Configuration error: {0}")]
    Config(String),
}
