//! Rendered output models

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::kind::TemplateKind;

/// Content produced from one template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTemplate {
    /// Final content, tokens replaced and line endings normalized
    pub content: String,
    /// Character offset of the cursor marker in `content`, if the template had one
    pub cursor_offset: Option<usize>,
}

impl RenderedTemplate {
    /// Empty content with no cursor hint
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A file ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Kind the file was generated from
    pub kind: TemplateKind,
    /// File name including extension
    pub file_name: String,
    /// File content
    pub content: String,
    /// Character offset for caret placement, if requested
    pub cursor_offset: Option<usize>,
}

/// Result of materializing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MaterializeOutcome {
    /// The file was created
    Created {
        /// Written path
        path: PathBuf,
        /// Caret hint carried over from rendering
        cursor_offset: Option<usize>,
    },
    /// A file already existed at the path and was left untouched
    AlreadyExists {
        /// Existing path
        path: PathBuf,
    },
    /// Dry run: the file would have been created
    WouldCreate {
        /// Target path
        path: PathBuf,
    },
}

impl MaterializeOutcome {
    /// Path the outcome refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            MaterializeOutcome::Created { path, .. }
            | MaterializeOutcome::AlreadyExists { path }
            | MaterializeOutcome::WouldCreate { path } => path,
        }
    }
}
