use std::path::PathBuf;
use std::time::Duration;

use super::defaults::*;

/// Where a report lives on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget {
    pub base_url: String,
    pub project_key: String,
    pub repo_slug: String,
    pub commit_id: String,
    pub report_key: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    pub terraform: PathBuf,
    pub scspell: PathBuf,
    pub git: PathBuf,
    pub working_dir: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            terraform: default_terraform_binary(),
            scspell: default_scspell_binary(),
            git: default_git_binary(),
            working_dir: PathBuf::from("."),
        }
    }
}

/// Everything one invocation needs besides the report's own content.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: ReportTarget,
    pub credentials: Credentials,
    pub tools: ToolsConfig,
    pub timeout_sec: u64,
    pub dry_run: bool,
    pub silent: bool,
}

impl RunConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}
