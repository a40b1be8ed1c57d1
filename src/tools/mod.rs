mod git;
mod scspell;
mod terraform;

pub use git::GitDiff;
pub use scspell::ScSpell;
pub use terraform::TerraformFmt;

use crate::error::ToolError;
use std::process::Command;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// An external analysis tool whose output feeds a report.
pub trait Tool {
    fn name(&self) -> &'static str;

    fn execute(&self) -> Result<ToolOutput, ToolError>;
}

/// Run `cmd` to completion and capture both streams.
///
/// A non-zero exit is not an error here; whether it means "findings" or
/// "broken" is up to the report kind.
fn run_captured(tool: &'static str, cmd: &mut Command) -> Result<ToolOutput, ToolError> {
    debug!("Running {:?}", cmd);

    let output = cmd
        .output()
        .map_err(|source| ToolError::Spawn { tool, source })?;

    let result = ToolOutput {
        // Killed by a signal
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    debug!(
        "{} exited with {} ({} bytes stdout, {} bytes stderr)",
        tool,
        result.exit_code,
        result.stdout.len(),
        result.stderr.len()
    );

    Ok(result)
}

/// Bare names go through PATH lookup; anything with a separator is used as a path.
fn command_for(binary: &std::path::Path) -> Command {
    let binary_str = binary.to_string_lossy();
    if binary_str.contains('/') || binary_str.contains('\\') {
        Command::new(binary)
    } else {
        Command::new(binary_str.as_ref())
    }
}
