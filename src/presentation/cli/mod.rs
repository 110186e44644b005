use anyhow::Result;
use clap::Parser;
use std::env;
use std::process::exit;
use tracing::debug;

use crate::application::use_cases::{Orchestrator, OrchestratorConfig};
use crate::common::error::GitslaveError;
use crate::infrastructure::filesystem::RegistryStore;
use crate::infrastructure::process::GitInvoker;
use crate::presentation::ui::colorizer::{ColorChoice, Colorizer};

/// Message shown for failures that are not configuration errors
pub const APOLOGY_MESSAGE: &str =
    "Sorry, something went wrong. Run again with GITSLAVE_LOG=debug for details.";

/// gitslave - run git across a master repository and its slave repositories
///
/// Every argument is forwarded to git. The `--gitslave-*` options are only
/// recognized before the first forwarded argument.
#[derive(Parser, Debug)]
#[command(name = "gitslave")]
#[command(about = "Run git across a master repository and its slave repositories")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Git executable to invoke
    #[arg(long = "gitslave-git", env = "GITSLAVE_GIT", default_value = "git", value_name = "PATH")]
    pub git: String,

    /// Number of repositories processed concurrently (0 = one per CPU)
    #[arg(long = "gitslave-jobs", env = "GITSLAVE_JOBS", default_value_t = 1, value_name = "N")]
    pub jobs: usize,

    /// When to color the report
    #[arg(
        long = "gitslave-color",
        env = "GITSLAVE_COLOR",
        value_enum,
        default_value = "auto",
        value_name = "WHEN"
    )]
    pub color: ColorChoice,

    /// Arguments forwarded to git
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "GIT_ARGS")]
    pub args: Vec<String>,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(self) -> Result<()> {
        let use_color = self.cli.color.should_colorize();
        colored::control::set_override(use_color);

        match self.execute(use_color).await {
            Ok(report) => {
                print!("{}", report);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", Self::failure_message(&e));
                exit(1);
            }
        }
    }

    /// Build the context from the current directory, run the command and color the report
    pub async fn execute(&self, use_color: bool) -> Result<String> {
        let current_dir = env::current_dir()?;
        let context = RegistryStore::new().load_context(&current_dir).await?;

        let config = OrchestratorConfig::new().with_jobs(self.cli.jobs);
        let orchestrator =
            Orchestrator::new(context, GitInvoker::new(&self.cli.git)).with_config(config);

        let report = orchestrator.run(&self.cli.args).await?;
        let colorizer = Colorizer::new(use_color)?;
        Ok(colorizer.colorize(&report))
    }

    /// Configuration errors are shown verbatim; anything else gets a generic apology
    pub fn failure_message(error: &anyhow::Error) -> String {
        match error.downcast_ref::<GitslaveError>() {
            Some(e) if e.is_config_error() => format!("ERROR: {}", e),
            _ => {
                debug!(error = ?error, "unexpected failure");
                APOLOGY_MESSAGE.to_string()
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
