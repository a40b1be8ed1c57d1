use super::{command_for, run_captured, Tool, ToolOutput};
use crate::error::ToolError;
use std::path::PathBuf;

/// `terraform fmt -check -diff -recursive` in the working directory.
pub struct TerraformFmt {
    pub binary: PathBuf,
    pub working_dir: PathBuf,
}

impl TerraformFmt {
    fn args() -> [&'static str; 4] {
        ["fmt", "-check", "-diff", "-recursive"]
    }
}

impl Tool for TerraformFmt {
    fn name(&self) -> &'static str {
        "terraform"
    }

    fn execute(&self) -> Result<ToolOutput, ToolError> {
        let mut cmd = command_for(&self.binary);
        cmd.args(Self::args()).current_dir(&self.working_dir);
        run_captured(self.name(), &mut cmd)
    }
}
