//! Configuration values and their defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Folder name searched for templates when none is configured
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Effective appgen configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppgenConfig {
    /// Overrides the root namespace read from the project file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_namespace: Option<String>,
    /// Template catalog directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    /// Extension of catalog files
    pub template_extension: String,
    /// Extension appended to generated file names
    pub output_extension: String,
    /// Character marking the caret position in templates
    pub cursor_marker: char,
    /// Extensions written without a UTF-8 byte-order mark
    pub no_bom_extensions: Vec<String>,
    /// Sub-folder receiving DTO and mapping-profile files
    pub dto_folder: String,
}

impl Default for AppgenConfig {
    fn default() -> Self {
        Self {
            root_namespace: None,
            templates_dir: None,
            template_extension: ".txt".to_string(),
            output_extension: ".cs".to_string(),
            cursor_marker: '$',
            no_bom_extensions: vec![".cmd".to_string(), ".bat".to_string(), ".json".to_string()],
            dto_folder: "Dto".to_string(),
        }
    }
}

/// Values supplied on the command line, applied over every file source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `--namespace`
    pub root_namespace: Option<String>,
    /// `--templates`
    pub templates_dir: Option<PathBuf>,
}

impl AppgenConfig {
    /// Apply command-line overrides
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(namespace) = &overrides.root_namespace {
            self.root_namespace = Some(namespace.clone());
        }
        if let Some(dir) = &overrides.templates_dir {
            self.templates_dir = Some(dir.clone());
        }
    }

    /// Check every value for consistency
    pub fn validate(&self) -> Result<()> {
        validate_extension("template_extension", &self.template_extension)?;
        validate_extension("output_extension", &self.output_extension)?;
        for extension in &self.no_bom_extensions {
            validate_extension("no_bom_extensions", extension)?;
        }

        if self.dto_folder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "dto_folder must not be empty".to_string(),
            ));
        }
        if self.dto_folder.contains(|c: char| c == '/' || c == '\\') {
            return Err(ConfigError::Validation(format!(
                "dto_folder must be a single folder name, got '{}'",
                self.dto_folder
            )));
        }
        if self.cursor_marker == '{' || self.cursor_marker == '}' || self.cursor_marker.is_whitespace() {
            return Err(ConfigError::Validation(format!(
                "cursor_marker '{}' would clash with template text",
                self.cursor_marker.escape_default()
            )));
        }
        Ok(())
    }

    /// Template catalog directory, searching defaults when none is configured
    ///
    /// Without a configured directory, `templates` beside the executable wins
    /// when it exists, then `templates` in the working directory.
    pub fn resolve_templates_dir(&self) -> PathBuf {
        if let Some(dir) = &self.templates_dir {
            return dir.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_TEMPLATES_DIR)))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR))
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn validate_extension(field: &str, extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(ConfigError::Validation(format!("{} must not be empty", field)));
    }
    if !extension.starts_with('.') || extension.len() == 1 {
        return Err(ConfigError::Validation(format!(
            "{} must start with '.' and name an extension, got '{}'",
            field, extension
        )));
    }
    Ok(())
}
