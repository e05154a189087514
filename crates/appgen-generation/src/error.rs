//! Error types for template generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving, rendering or writing templates
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A kind name outside the closed set of template kinds
    #[error("Unknown template kind: {0}")]
    UnknownTemplateKind(String),

    /// The template directory path exists but is not a directory
    #[error("Template directory is not a directory: {}", .0.display())]
    InvalidTemplateDirectory(PathBuf),

    /// A template body could not be read
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        /// Template file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing a generated file or folder failed
    #[error("Write failed for {}: {source}", path.display())]
    WriteFailed {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result alias for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;
