// Show the effective configuration and where it comes from

use appgen_config::{ConfigLoader, ConfigOverrides};
use appgen_generation::ProjectContext;

use super::{Command, GlobalOptions};
use crate::{error::CliResult, output::OutputStyle};

/// Inspect configuration
pub struct ConfigCommand {
    pub action: ConfigAction,
    pub options: GlobalOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Path,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, options: GlobalOptions) -> Self {
        Self { action, options }
    }

    /// Effective configuration for `project` as TOML
    pub fn effective_toml(&self, project: &ProjectContext) -> CliResult<String> {
        let config = self
            .options
            .load_config(Some(project.root()), &ConfigOverrides::default())?;
        Ok(config.to_toml()?)
    }

    fn show_config(&self) -> CliResult<()> {
        let project = ProjectContext::discover(&std::env::current_dir()?)?;
        print!("{}", self.effective_toml(&project)?);
        Ok(())
    }

    fn show_path(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        match ConfigLoader::default_config_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("{}", style.warning("No configuration directory on this platform")),
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> CliResult<()> {
        match self.action {
            ConfigAction::Show => self.show_config(),
            ConfigAction::Path => self.show_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_effective_toml_reflects_project_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("appgen.toml"),
            "root_namespace = \"Acme\"\ndto_folder = \"Contracts\"\n",
        )
        .unwrap();
        let project = ProjectContext::new(temp_dir.path());

        let toml = ConfigCommand::new(ConfigAction::Show, GlobalOptions::default())
            .effective_toml(&project)
            .unwrap();

        assert!(toml.contains("root_namespace = \"Acme\""));
        assert!(toml.contains("dto_folder = \"Contracts\""));
        assert!(toml.contains("output_extension = \".cs\""));
    }
}
