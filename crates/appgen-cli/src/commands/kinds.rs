// List the template kinds and the files they produce

use appgen_config::ConfigOverrides;
use appgen_generation::{
    normalize_entity_name, KindFolder, TemplateCatalog, TemplateEngine, TemplateKind,
};

use super::{Command, GlobalOptions};
use crate::{error::CliResult, output::OutputStyle};

/// Show every kind with its file name for an example entity
pub struct KindsCommand {
    pub entity: String,
    pub options: GlobalOptions,
}

/// One row of the kinds listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindRow {
    pub kind: TemplateKind,
    pub file_name: String,
    pub folder: String,
}

impl KindsCommand {
    pub fn new(entity: String, options: GlobalOptions) -> Self {
        Self { entity, options }
    }

    /// Rows for `entity`, using the configured extension and DTO folder
    pub fn rows(&self, output_extension: &str, dto_folder: &str) -> Vec<KindRow> {
        let entity = normalize_entity_name(&self.entity);
        let engine = TemplateEngine::new(TemplateCatalog::empty())
            .with_output_extension(output_extension);

        TemplateKind::ALL
            .iter()
            .map(|kind| KindRow {
                kind: *kind,
                file_name: engine.resolve_file_name(*kind, &entity),
                folder: match kind.folder() {
                    KindFolder::Entity => entity.clone(),
                    KindFolder::Dto => format!("{}/{}", entity, dto_folder),
                },
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl Command for KindsCommand {
    async fn execute(&self) -> CliResult<()> {
        let cwd = std::env::current_dir()?;
        let config = self.options.load_config(Some(&cwd), &ConfigOverrides::default())?;
        let style = OutputStyle::default();

        println!("{}", style.header("Template kinds"));
        for row in self.rows(&config.output_extension, &config.dto_folder) {
            println!(
                "{}",
                style.key_value(
                    row.kind.identifier(),
                    &format!("{}/{}", row.folder, style.code(&row.file_name))
                )
            );
        }
        Ok(())
    }
}
