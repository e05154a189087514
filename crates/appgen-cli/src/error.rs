// CLI error types and user-facing messages

use appgen_config::ConfigError;
use appgen_generation::GenerationError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("{failed} file(s) could not be generated")]
    PartialFailure { failed: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'appgen --help' for usage information.", message)
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nRun 'appgen config show' to check your configuration.",
                    msg
                )
            }
            CliError::Generation(msg) => {
                format!("Generation failed: {}", msg)
            }
            CliError::PartialFailure { failed } => {
                format!(
                    "{} file(s) could not be generated.\n\nRerun with -v for details; existing files were left untouched.",
                    failed
                )
            }
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<GenerationError> for CliError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::UnknownTemplateKind(kind) => CliError::InvalidArgument {
                message: format!(
                    "unknown template kind '{}' (run 'appgen kinds' to list them)",
                    kind
                ),
            },
            other => CliError::Generation(other.to_string()),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
