pub mod schema;
pub mod upload;

use crate::config::default_timeout_sec;
use crate::report::ReportResult;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "code-insight-reports")]
#[command(
    author,
    version,
    about = "Uploads Code Insight reports to Bitbucket Server"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a report with an explicit status and annotations document
    Custom(CustomArgs),

    /// Run `terraform fmt -check -diff` and report unformatted blocks
    Terraform(TerraformArgs),

    /// Report every hunk of a git diff
    GitDiff(GitDiffArgs),

    /// Run scspell over a list of files and report unknown words
    SpellCheck(SpellCheckArgs),

    /// Print JSON Schema for the annotations document
    Schema,
}

#[derive(Args, Clone, Debug)]
pub struct AuthArgs {
    /// User to authenticate with Bitbucket
    #[arg(short, long, env = "BITBUCKET_USER")]
    pub user: String,

    /// Password or access token (prompted for when omitted)
    #[arg(short, long, env = "BITBUCKET_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ServerArgs {
    /// URL of the Bitbucket server
    #[arg(long, alias = "base_url", env = "BITBUCKET_URL")]
    pub base_url: String,

    /// Key of the project the repository is in
    #[arg(long, alias = "project_key", env = "BITBUCKET_PROJECT")]
    pub project_key: String,

    /// Repository slug
    #[arg(long, alias = "repo_slug", env = "BITBUCKET_REPO")]
    pub repo_slug: String,

    /// Commit hash to attach the report to
    #[arg(long, env = "BITBUCKET_COMMIT")]
    pub commit: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = default_timeout_sec())]
    pub timeout: u64,
}

#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Bitbucket key for the report
    #[arg(long, alias = "report_key")]
    pub report_key: String,

    /// Human readable title for the report
    #[arg(long, alias = "report_title")]
    pub report_title: String,

    /// Description for the report
    #[arg(long, alias = "report_desc")]
    pub report_desc: String,

    /// Always publish PASS and exit 0 (findings are still uploaded)
    #[arg(long, alias = "force_pass")]
    pub force_pass: bool,

    /// Do not print the summary
    #[arg(long)]
    pub silent: bool,

    /// Print the requests instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Clone, Debug)]
pub struct CustomArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Status of the report, PASS or FAIL
    #[arg(long)]
    pub status: ReportResult,

    /// Annotations JSON document: {"annotations": [...]}
    #[arg(long, conflicts_with = "file")]
    pub annotations: Option<String>,

    /// File holding the annotations JSON document
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct TerraformArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Previously captured `terraform fmt -diff` output (skips running terraform)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Directory to run terraform in
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// terraform binary
    #[arg(long, env = "TERRAFORM_BIN")]
    pub terraform_bin: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct GitDiffArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// File holding `git diff` output (skips running git)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Ref to diff against (e.g., origin/main)
    #[arg(long, conflicts_with = "file")]
    pub base: Option<String>,

    /// Directory to run git in
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// git binary
    #[arg(long, env = "GIT_BIN")]
    pub git_bin: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct SpellCheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Files to spell check
    #[arg(long, alias = "file_list", num_args = 1.., required = true)]
    pub file_list: Vec<PathBuf>,

    /// Extra dictionary files
    #[arg(long, num_args = 1..)]
    pub dict: Vec<PathBuf>,

    /// scspell binary
    #[arg(long, env = "SCSPELL_BIN")]
    pub scspell_bin: Option<PathBuf>,
}
