//! appgen configuration
//!
//! Loads the settings that steer scaffolding (root namespace, template
//! catalog location, extensions, cursor marker, DTO folder) from defaults,
//! config files, the environment and command-line flags.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILE};
pub use types::{AppgenConfig, ConfigOverrides, DEFAULT_TEMPLATES_DIR};
