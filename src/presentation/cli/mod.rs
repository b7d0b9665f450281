pub mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::domain::value_objects::scm_type::ScmType;
use crate::infrastructure::filesystem::config_store::{ConfigStore, ImportConfig};

/// Output format options for listing and preview commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

/// forge-import - Check out projects hosted on source forges
#[derive(Parser)]
#[command(name = "forge-import")]
#[command(about = "Build and run the command that checks out a project from a source forge")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (defaults to ~/.config/forge-import/config.yaml)
    #[arg(long, global = true, env = "FORGE_IMPORT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// What to import and how; shared by `command` and `import`
#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Project name on the forge (the account name on Bitbucket)
    pub project: String,

    /// Provider: Sourceforge, BerliOS, Bitbucket or Gitorious
    #[arg(short, long, env = "FORGE_IMPORT_PROVIDER")]
    pub provider: Option<String>,

    /// SCM to use: hg, git or svn
    #[arg(short, long, value_parser = parse_scm)]
    pub scm: Option<ScmType>,

    /// Repository inside the project
    #[arg(short, long, default_value = "")]
    pub repository: String,

    /// Username for developer access
    #[arg(short, long, env = "FORGE_IMPORT_USERNAME")]
    pub username: Option<String>,

    /// Use developer (read-write) access instead of an anonymous check-out
    #[arg(short, long, conflicts_with = "read_only")]
    pub developer: bool,

    /// Force an anonymous read-only check-out
    #[arg(long)]
    pub read_only: bool,

    /// Explicit checkout directory
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Directory receiving <projects-dir>/<project>
    #[arg(long)]
    pub projects_dir: Option<PathBuf>,
}

fn parse_scm(value: &str) -> Result<ScmType, String> {
    value.parse::<ScmType>().map_err(|e| e.to_string())
}

#[derive(Subcommand)]
pub enum Commands {
    /// List providers and the SCMs they host
    Providers {
        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the checkout command without running it
    Command {
        #[command(flatten)]
        args: ImportArgs,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Check the project out
    Import {
        #[command(flatten)]
        args: ImportArgs,

        /// Show what would be run without running it
        #[arg(long)]
        dry_run: bool,

        /// Abort the SCM client after this many seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Write a configuration file template
    Init {
        /// Force overwrite existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Install the tracing subscriber; `RUST_LOG` wins over `--verbose`
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        match &self.cli.command {
            Commands::Providers { output } => {
                commands::providers::ProvidersCommand::new(*output)
                    .execute()
                    .await
            }
            Commands::Command { args, output } => {
                let config = commands::resolve_import_config(args, &self.load_config()?)?;
                commands::command::CommandCommand::new(config, *output)
                    .execute()
                    .await
            }
            Commands::Import {
                args,
                dry_run,
                timeout,
            } => {
                let file_config = self.load_config()?;
                let config = commands::resolve_import_config(args, &file_config)?
                    .with_dry_run(*dry_run)
                    .with_timeout(timeout.or(file_config.timeout_seconds));
                commands::import::ImportCommand::new(config).execute().await
            }
            Commands::Init { force } => {
                let path = self.config_path()?;
                commands::init::InitCommand::new(path, *force).execute().await
            }
        }
    }

    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.cli.config {
            Some(path) => Ok(path.clone()),
            None => Ok(ConfigStore::default_path()?),
        }
    }

    fn load_config(&self) -> anyhow::Result<ImportConfig> {
        let path = match self.config_path() {
            Ok(path) => path,
            // Without a home directory there is simply no user configuration
            Err(e) if self.cli.config.is_none() => {
                tracing::debug!("{}", e);
                return Ok(ImportConfig::default());
            }
            Err(e) => return Err(e),
        };
        Ok(ConfigStore::new().load(path)?)
    }
}
