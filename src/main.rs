use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod bitbucket;
mod cli;
mod config;
mod error;
mod output;
mod parser;
mod report;
mod tools;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("code_insight_reports=debug")
    } else {
        EnvFilter::new("code_insight_reports=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Custom(args) => cli::upload::execute_custom(args)?,
        Commands::Terraform(args) => cli::upload::execute_terraform(args)?,
        Commands::GitDiff(args) => cli::upload::execute_git_diff(args)?,
        Commands::SpellCheck(args) => cli::upload::execute_spell_check(args)?,
        Commands::Schema => cli::schema::execute()?,
    };

    // The reconciled report result is the process result
    std::process::exit(exit_code)
}
