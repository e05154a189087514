//! Layered configuration loading
//!
//! Sources, lowest precedence first: built-in defaults, the global config
//! file, the project's `appgen.toml`, an explicit `--config` file,
//! `APPGEN_*` environment variables, then command-line overrides.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{AppgenConfig, ConfigOverrides},
};

/// Prefix of environment variables read as configuration
pub const ENV_PREFIX: &str = "APPGEN";

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "appgen.toml";

/// Loads [`AppgenConfig`] from every configured source
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    global_path: Option<PathBuf>,
    project_root: Option<PathBuf>,
    config_file: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader reading the global file at its default location
    pub fn new() -> Self {
        Self {
            global_path: Self::default_config_path(),
            project_root: None,
            config_file: None,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Default global config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("appgen").join("config.toml"))
    }

    /// Read the global file from `path` instead, or skip it with `None`
    pub fn with_global_path(mut self, path: Option<PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    /// Also read `appgen.toml` from `root`
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Also read the explicit file at `path`, which must exist
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Read environment variables with `prefix` instead of `APPGEN`
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Global config file path this loader reads
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Load, apply `overrides` and validate
    pub fn load(&self, overrides: &ConfigOverrides) -> Result<AppgenConfig> {
        let mut builder = Config::builder();

        if let Some(path) = &self.global_path {
            debug!(path = %path.display(), "global config source");
            builder = builder.add_source(File::from(path.clone()).format(FileFormat::Toml).required(false));
        }

        if let Some(root) = &self.project_root {
            let path = root.join(PROJECT_CONFIG_FILE);
            debug!(path = %path.display(), "project config source");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        if let Some(path) = &self.config_file {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            builder = builder.add_source(File::from(path.clone()).format(FileFormat::Toml));
        }

        builder = builder.add_source(Environment::with_prefix(&self.env_prefix));

        let mut config: AppgenConfig = builder.build()?.try_deserialize()?;
        config.apply(overrides);
        config.validate()?;

        debug!(?config, "configuration loaded");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn isolated_loader(prefix: &str) -> ConfigLoader {
        ConfigLoader::new()
            .with_global_path(None)
            .with_env_prefix(prefix)
    }

    #[test]
    fn test_load_defaults_without_sources() {
        let config = isolated_loader("APPGEN_UNIT_DEFAULTS")
            .load(&ConfigOverrides::default())
            .unwrap();
        assert_eq!(config, AppgenConfig::default());
    }

    #[test]
    fn test_project_file_overrides_global_file() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        fs::write(&global, "root_namespace = \"Global\"\ndto_folder = \"Contracts\"\n").unwrap();
        let project = temp_dir.path().join("project");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join(PROJECT_CONFIG_FILE), "root_namespace = \"Project\"\n").unwrap();

        let config = isolated_loader("APPGEN_UNIT_LAYERS")
            .with_global_path(Some(global))
            .with_project_root(&project)
            .load(&ConfigOverrides::default())
            .unwrap();

        assert_eq!(config.root_namespace.as_deref(), Some("Project"));
        assert_eq!(config.dto_folder, "Contracts");
        assert_eq!(config.output_extension, ".cs");
    }

    #[test]
    fn test_overrides_beat_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "root_namespace = \"Project\"\n").unwrap();

        let config = isolated_loader("APPGEN_UNIT_OVERRIDES")
            .with_project_root(temp_dir.path())
            .load(&ConfigOverrides {
                root_namespace: Some("Flag".to_string()),
                templates_dir: Some(PathBuf::from("custom")),
            })
            .unwrap();

        assert_eq!(config.root_namespace.as_deref(), Some("Flag"));
        assert_eq!(config.templates_dir, Some(PathBuf::from("custom")));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = isolated_loader("APPGEN_UNIT_MISSING")
            .with_config_file(temp_dir.path().join("nope.toml"))
            .load(&ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_invalid_value_fails_validation() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("bad.toml");
        fs::write(&file, "output_extension = \"cs\"\n").unwrap();

        let result = isolated_loader("APPGEN_UNIT_INVALID")
            .with_config_file(&file)
            .load(&ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("broken.toml");
        fs::write(&file, "output_extension = [\n").unwrap();

        let result = isolated_loader("APPGEN_UNIT_BROKEN")
            .with_config_file(&file)
            .load(&ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
