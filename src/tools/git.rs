use super::{command_for, run_captured, Tool, ToolOutput};
use crate::error::ToolError;
use std::path::PathBuf;

/// `git diff [<base>]` in the working directory.
pub struct GitDiff {
    pub binary: PathBuf,
    pub working_dir: PathBuf,
    pub base: Option<String>,
}

impl GitDiff {
    fn args(&self) -> Vec<&str> {
        // Pin the output shape regardless of the user's git config
        let mut args = vec![
            "diff",
            "--no-color",
            "--no-ext-diff",
            "--src-prefix=a/",
            "--dst-prefix=b/",
        ];
        if let Some(base) = &self.base {
            args.push(base.as_str());
        }
        args
    }
}

impl Tool for GitDiff {
    fn name(&self) -> &'static str {
        "git"
    }

    fn execute(&self) -> Result<ToolOutput, ToolError> {
        let mut cmd = command_for(&self.binary);
        cmd.args(self.args()).current_dir(&self.working_dir);

        let output = run_captured(self.name(), &mut cmd)?;
        if !output.success() {
            return Err(ToolError::NonZeroExit {
                tool: self.name(),
                code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output)
    }
}
