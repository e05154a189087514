// Command handlers for the appgen CLI

pub mod config;
pub mod expand;
pub mod kinds;
pub mod new;
pub mod render;

pub use config::{ConfigAction, ConfigCommand};
pub use expand::ExpandCommand;
pub use kinds::KindsCommand;
pub use new::NewCommand;
pub use render::RenderCommand;

use std::path::{Path, PathBuf};

use appgen_config::{AppgenConfig, ConfigLoader, ConfigOverrides};
use appgen_generation::{TemplateCatalog, TemplateEngine};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

/// Options shared by every command
///
/// `Default` reads no global config file; the router fills in the real location.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
    /// Explicit `--config` file
    pub config_file: Option<PathBuf>,
    /// Global config file location
    pub global_config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Load the effective configuration for a project rooted at `project_root`
    pub fn load_config(
        &self,
        project_root: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> CliResult<AppgenConfig> {
        let mut loader = ConfigLoader::new().with_global_path(self.global_config.clone());
        if let Some(root) = project_root {
            loader = loader.with_project_root(root);
        }
        if let Some(file) = &self.config_file {
            loader = loader.with_config_file(file);
        }
        Ok(loader.load(overrides)?)
    }
}

/// Template engine configured from `config`
///
/// A catalog that cannot be loaded leaves every template empty, so a batch
/// still creates its files.
pub fn build_engine(config: &AppgenConfig) -> TemplateEngine {
    let templates_dir = config.resolve_templates_dir();
    debug!(dir = %templates_dir.display(), "loading template catalog");
    let catalog = match TemplateCatalog::load_with_extension(&templates_dir, &config.template_extension) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "template catalog unavailable; all templates render empty");
            TemplateCatalog::empty()
        }
    };

    TemplateEngine::new(catalog)
        .with_output_extension(config.output_extension.clone())
        .with_cursor_marker(config.cursor_marker)
}

/// The pattern argument, or one line read from stdin when it was omitted
pub async fn read_pattern(pattern: Option<&str>) -> CliResult<String> {
    let mut stdin = BufReader::new(tokio::io::stdin());
    read_pattern_from(pattern, &mut stdin).await
}

/// Like [`read_pattern`], reading from `reader`
pub async fn read_pattern_from<R>(pattern: Option<&str>, reader: &mut R) -> CliResult<String>
where
    R: AsyncBufRead + Unpin + Send,
{
    if let Some(pattern) = pattern {
        return Ok(pattern.to_string());
    }

    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
}
