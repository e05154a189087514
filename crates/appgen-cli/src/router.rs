// Command routing and dispatch

use std::path::PathBuf;

use appgen_config::ConfigLoader;
use clap::{ArgAction, Parser, Subcommand};

use crate::{
    commands::*,
    completion::generate_completions,
    error::CliResult,
    logging::init_logging,
};

/// appgen - compound file patterns and application-service scaffolding
#[derive(Parser, Debug)]
#[command(name = "appgen")]
#[command(bin_name = "appgen")]
#[command(about = "Expand compound file patterns and scaffold application-service files")]
#[command(
    long_about = "appgen expands a compact pattern such as 'Books/(book, author)' or \
'home.(html,js)' into concrete paths, and scaffolds DTO, mapping-profile and \
application-service files for every entity it names.\n\nQuick start:\n  • appgen expand 'home.(html,js)'\n  • appgen new 'Catalog/(book, author)'\n  • appgen kinds"
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preview changes without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Read configuration from FILE after the global and project files
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the paths a pattern expands to
    #[command(about = "Print the paths a pattern expands to")]
    Expand {
        /// Compound pattern (read from stdin when omitted)
        #[arg(value_name = "PATTERN")]
        pattern: Option<String>,

        /// Print a JSON array instead of one path per line
        #[arg(long)]
        json: bool,
    },

    /// Scaffold folders and files for every entity a pattern names
    #[command(about = "Scaffold folders and files for every entity a pattern names")]
    New {
        /// Compound pattern (read from stdin when omitted)
        #[arg(value_name = "PATTERN")]
        pattern: Option<String>,

        /// Folder to create entities under (default: current directory)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Root namespace, overriding project file and configuration
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,

        /// Template catalog directory
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Project root (default: nearest folder with a .csproj or appgen.toml)
        #[arg(long, value_name = "DIR")]
        project_root: Option<PathBuf>,
    },

    /// Render one template kind to stdout
    #[command(about = "Render one template kind for an entity to stdout")]
    Render {
        /// Template kind (DefaultDto, CreateDto, UpdateDto, PagedDto, MapProfile, Interface, Class)
        #[arg(value_name = "KIND")]
        kind: String,

        /// Entity name
        #[arg(value_name = "ENTITY")]
        entity: String,

        /// Folder relative to the project root, used for the namespace
        #[arg(long, value_name = "REL")]
        folder: Option<String>,

        /// Root namespace
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,

        /// Template catalog directory
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,
    },

    /// List template kinds
    #[command(about = "List template kinds and the files they produce")]
    Kinds {
        /// Example entity name
        #[arg(long, default_value = "Book")]
        entity: String,
    },

    /// Inspect configuration
    #[command(about = "Show the effective configuration or its location")]
    Config {
        #[command(subcommand)]
        action: Option<ConfigSubcommand>,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the global configuration file location
    Path,
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli).await
    }

    /// Options every command receives
    pub fn global_options(cli: &Cli) -> GlobalOptions {
        GlobalOptions {
            dry_run: cli.dry_run,
            config_file: cli.config.clone(),
            global_config: ConfigLoader::default_config_path(),
        }
    }

    /// Execute a command
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        let options = Self::global_options(cli);

        match &cli.command {
            Commands::Expand { pattern, json } => {
                let cmd = ExpandCommand::new(pattern.clone(), *json);
                cmd.execute().await
            }
            Commands::New {
                pattern,
                dir,
                namespace,
                templates,
                project_root,
            } => {
                let cmd = NewCommand::new(pattern.clone(), options)
                    .with_dir(dir.clone())
                    .with_namespace(namespace.clone())
                    .with_templates(templates.clone())
                    .with_project_root(project_root.clone());
                cmd.execute().await
            }
            Commands::Render {
                kind,
                entity,
                folder,
                namespace,
                templates,
            } => {
                let cmd = RenderCommand::new(kind.clone(), entity.clone(), options)
                    .with_folder(folder.clone())
                    .with_namespace(namespace.clone())
                    .with_templates(templates.clone());
                cmd.execute().await
            }
            Commands::Kinds { entity } => {
                let cmd = KindsCommand::new(entity.clone(), options);
                cmd.execute().await
            }
            Commands::Config { action } => {
                let action = match action {
                    Some(ConfigSubcommand::Show) | None => ConfigAction::Show,
                    Some(ConfigSubcommand::Path) => ConfigAction::Path,
                };
                let cmd = ConfigCommand::new(action, options);
                cmd.execute().await
            }
            Commands::Completions { shell } => generate_completions(shell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_with_flags() {
        let cli = Cli::try_parse_from([
            "appgen",
            "-vv",
            "--dry-run",
            "new",
            "Books/(book, author)",
            "--dir",
            "src/App",
            "--namespace",
            "Acme",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(cli.dry_run);
        match cli.command {
            Commands::New {
                pattern,
                dir,
                namespace,
                ..
            } => {
                assert_eq!(pattern.as_deref(), Some("Books/(book, author)"));
                assert_eq!(dir, Some(PathBuf::from("src/App")));
                assert_eq!(namespace.as_deref(), Some("Acme"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_expand_without_pattern() {
        let cli = Cli::try_parse_from(["appgen", "expand", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Expand {
                pattern: None,
                json: true
            }
        ));
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["appgen", "kinds", "--config", "custom.toml", "-q"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_render_requires_entity() {
        assert!(Cli::try_parse_from(["appgen", "render", "Class"]).is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from(["appgen", "--dry-run", "kinds"]).unwrap();
        let options = CommandRouter::global_options(&cli);
        assert!(options.dry_run);
        assert_eq!(options.config_file, None);
    }
}
