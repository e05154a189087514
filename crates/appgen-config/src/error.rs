//! Configuration error types

use thiserror::Error;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A source could not be read or did not deserialize
    #[error("Parse error: {0}")]
    Parse(#[from] config::ConfigError),

    /// The effective configuration could not be rendered as TOML
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The effective configuration holds an invalid value
    #[error("Validation error: {0}")]
    Validation(String),

    /// An explicitly requested config file does not exist
    #[error("Config file not found: {0}")]
    NotFound(String),
}
