// Scaffold entity folders and template files from a pattern

use std::path::{Path, PathBuf};

use appgen_config::ConfigOverrides;
use appgen_generation::{
    project::absolutize, FileMaterializer, FileOutcome, MaterializerConfig, ProjectContext,
    ScaffoldReport, Scaffolder,
};
use tracing::debug;

use super::{build_engine, read_pattern, Command, GlobalOptions};
use crate::{
    error::{CliError, CliResult},
    output::OutputStyle,
};

/// Expand a pattern and write the template set for every entity it names
pub struct NewCommand {
    pub pattern: Option<String>,
    pub dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub templates: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
    pub options: GlobalOptions,
}

impl NewCommand {
    pub fn new(pattern: Option<String>, options: GlobalOptions) -> Self {
        Self {
            pattern,
            dir: None,
            namespace: None,
            templates: None,
            project_root: None,
            options,
        }
    }

    pub fn with_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.dir = dir;
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_templates(mut self, templates: Option<PathBuf>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_project_root(mut self, project_root: Option<PathBuf>) -> Self {
        self.project_root = project_root;
        self
    }

    /// Folder entities are created under
    pub fn target_dir(&self) -> CliResult<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(absolutize(dir)?),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Scaffolder wired from the project, configuration and flags
    pub fn scaffolder(&self, target: &Path) -> CliResult<Scaffolder> {
        let mut project = match &self.project_root {
            Some(root) => ProjectContext::at(root)?,
            None => ProjectContext::discover(target)?,
        };

        let overrides = ConfigOverrides {
            root_namespace: self.namespace.clone(),
            templates_dir: self.templates.clone(),
        };
        let config = self.options.load_config(Some(project.root()), &overrides)?;
        if let Some(namespace) = &config.root_namespace {
            project = project.with_root_namespace(Some(namespace.clone()));
        }
        debug!(
            root = %project.root().display(),
            namespace = ?project.root_namespace(),
            "project context"
        );

        let engine = build_engine(&config);
        let materializer = FileMaterializer::with_config(MaterializerConfig {
            dry_run: self.options.dry_run,
            no_bom_extensions: config.no_bom_extensions.clone(),
        });

        Ok(Scaffolder::new(engine, materializer, project).with_dto_folder(config.dto_folder.clone()))
    }

    /// Generate files for `pattern` under `target`
    pub async fn run(&self, pattern: &str, target: &Path) -> CliResult<ScaffoldReport> {
        let scaffolder = self.scaffolder(target)?;
        Ok(scaffolder.run(pattern, target).await)
    }

    /// Console lines describing `report`, paths shown relative to `base`
    pub fn report_lines(&self, style: &OutputStyle, report: &ScaffoldReport, base: &Path) -> Vec<String> {
        let mut lines = Vec::new();
        let folder_verb = if self.options.dry_run { "Would create folder" } else { "Created folder" };

        for folder in &report.folders {
            lines.push(style.info(&format!("{} {}", folder_verb, display_path(folder, base))));
        }
        for failure in &report.failed_folders {
            lines.push(style.error(&format!(
                "Could not create folder {}: {}",
                display_path(&failure.path, base),
                failure.reason
            )));
        }

        for file in &report.files {
            let line = match &file.outcome {
                FileOutcome::Created { path, .. } => {
                    style.success(&format!("Created {}", display_path(path, base)))
                }
                FileOutcome::AlreadyExists { path } => {
                    style.warning(&format!("{} already exists", display_path(path, base)))
                }
                FileOutcome::WouldCreate { path } => {
                    style.info(&format!("Would create {}", display_path(path, base)))
                }
                FileOutcome::Failed { path, reason } => {
                    style.error(&format!("Failed {}: {}", display_path(path, base), reason))
                }
            };
            lines.push(line);
        }

        if let Some(FileOutcome::Created {
            path,
            cursor_offset,
        }) = report.last_created().map(|file| &file.outcome)
        {
            let open = match cursor_offset {
                Some(offset) => format!("Open {} at offset {}", display_path(path, base), offset),
                None => format!("Open {}", display_path(path, base)),
            };
            lines.push(style.info(&open));
        }

        lines
    }
}

fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

#[async_trait::async_trait]
impl Command for NewCommand {
    async fn execute(&self) -> CliResult<()> {
        let pattern = read_pattern(self.pattern.as_deref()).await?;
        let target = self.target_dir()?;
        let report = self.run(&pattern, &target).await?;

        let style = OutputStyle::default();
        for line in self.report_lines(&style, &report, &target) {
            println!("{}", line);
        }

        if report.has_failures() {
            return Err(CliError::PartialFailure {
                failed: report.failure_count(),
            });
        }
        Ok(())
    }
}
