// Render one template kind to stdout

use std::path::PathBuf;

use appgen_config::ConfigOverrides;
use appgen_generation::{
    normalize_entity_name, GenerationContext, ProjectContext, RenderedTemplate, TemplateKind,
};

use super::{build_engine, Command, GlobalOptions};
use crate::{
    error::{CliError, CliResult},
    logging::VerbosityLevel,
};

/// Print the rendered template of one kind for one entity
pub struct RenderCommand {
    pub kind: String,
    pub entity: String,
    pub folder: Option<String>,
    pub namespace: Option<String>,
    pub templates: Option<PathBuf>,
    pub options: GlobalOptions,
}

impl RenderCommand {
    pub fn new(kind: String, entity: String, options: GlobalOptions) -> Self {
        Self {
            kind,
            entity,
            folder: None,
            namespace: None,
            templates: None,
            options,
        }
    }

    pub fn with_folder(mut self, folder: Option<String>) -> Self {
        self.folder = folder;
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

    /// Render against `project`
    pub fn render(&self, project: &ProjectContext) -> CliResult<RenderedTemplate> {
        let kind: TemplateKind = self.kind.parse()?;
        let entity = normalize_entity_name(&self.entity);
        if entity.is_empty() {
            return Err(CliError::InvalidArgument {
                message: "entity name must not be empty".to_string(),
            });
        }

        let overrides = ConfigOverrides {
            root_namespace: self.namespace.clone(),
            templates_dir: self.templates.clone(),
        };
        let config = self.options.load_config(Some(project.root()), &overrides)?;
        let engine = build_engine(&config);

        let context = GenerationContext {
            root_namespace: config
                .root_namespace
                .clone()
                .or_else(|| project.root_namespace().map(str::to_string)),
            relative_folder: self.folder.clone(),
            entity_name: entity,
        };

        Ok(engine.render(kind, &context)?)
    }
}

#[async_trait::async_trait]
impl Command for RenderCommand {
    async fn execute(&self) -> CliResult<()> {
        let project = ProjectContext::discover(&std::env::current_dir()?)?;
        let rendered = self.render(&project)?;

        print!("{}", rendered.content);
        if VerbosityLevel::Verbose.should_output() {
            match rendered.cursor_offset {
                Some(offset) => eprintln!("cursor offset: {}", offset),
                None => eprintln!("cursor offset: none"),
            }
        }
        Ok(())
    }
}
