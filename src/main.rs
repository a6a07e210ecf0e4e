mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::env;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::cmd::create::{self, CreateCommandArgs};
use crate::config::DescriptionFormat;
use crate::error::AppResult;

#[derive(Parser)]
#[command(
    name = "issue-seed",
    author,
    version,
    about = "Create the fixed E2E testing backlog in a Jira project",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    create: CreateArgs,
    /// Log request diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the Jira settings read from the environment (token masked).
    Config,
    /// List the issues a run would create.
    Templates,
}

// Issues are created on every run; nothing tracks what an earlier run created.
#[derive(Args)]
struct CreateArgs {
    /// Project key to create issues in. Falls back to JIRA_PROJECT_KEY, then BB.
    #[arg(short, long)]
    project: Option<String>,
    /// REST API version: 2 sends plain-text descriptions, 3 rich-text documents.
    #[arg(long, value_enum)]
    api_version: Option<ApiVersion>,
    /// Skip the project existence check before creating issues.
    #[arg(long)]
    skip_project_check: bool,
    /// Print what would be created without calling Jira.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ApiVersion {
    #[value(name = "2")]
    V2,
    #[value(name = "3")]
    V3,
}

impl From<ApiVersion> for DescriptionFormat {
    fn from(version: ApiVersion) -> Self {
        match version {
            ApiVersion::V2 => DescriptionFormat::Plain,
            ApiVersion::V3 => DescriptionFormat::Document,
        }
    }
}

impl From<CreateArgs> for CreateCommandArgs {
    fn from(args: CreateArgs) -> Self {
        Self {
            project: args.project,
            description_format: args.api_version.map(Into::into),
            skip_project_check: args.skip_project_check,
            dry_run: args.dry_run,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    infra::logging::init(cli.verbose);

    let lookup = |name: &str| env::var(name).ok();

    match cli.command {
        Some(Commands::Config) => {
            cmd::config::run(lookup);
            Ok(())
        }
        Some(Commands::Templates) => {
            cmd::templates::run();
            Ok(())
        }
        None => create::run(cli.create.into(), lookup).await,
    }
}
