//! Per-file generation context

use serde::{Deserialize, Serialize};

use crate::{kind::TemplateKind, naming::effective_namespace};

/// Values a single rendered file is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationContext {
    /// Project root namespace, if the project configures one
    pub root_namespace: Option<String>,
    /// Folder of the generated file relative to the project root
    pub relative_folder: Option<String>,
    /// Entity name, already normalized to leading-uppercase form
    pub entity_name: String,
}

impl GenerationContext {
    /// Create a context for `entity_name`
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            root_namespace: None,
            relative_folder: None,
            entity_name: entity_name.into(),
        }
    }

    /// Set the root namespace
    pub fn with_root_namespace(mut self, root_namespace: impl Into<String>) -> Self {
        self.root_namespace = Some(root_namespace.into());
        self
    }

    /// Set the relative folder
    pub fn with_relative_folder(mut self, relative_folder: impl Into<String>) -> Self {
        self.relative_folder = Some(relative_folder.into());
        self
    }

    /// Namespace a file of `kind` receives in this context
    pub fn namespace_for(&self, kind: TemplateKind) -> String {
        effective_namespace(
            self.root_namespace.as_deref(),
            self.relative_folder.as_deref(),
            kind,
        )
    }
}
