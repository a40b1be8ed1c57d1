use super::{command_for, run_captured, Tool, ToolOutput};
use crate::error::ToolError;
use std::ffi::OsString;
use std::path::PathBuf;

/// `scspell --report-only` over a file list. Findings are written to stderr and
/// a successful exit means no unknown words were found.
pub struct ScSpell {
    pub binary: PathBuf,
    pub files: Vec<PathBuf>,
    pub dictionaries: Vec<PathBuf>,
}

impl ScSpell {
    fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--report-only".into()];
        for dictionary in &self.dictionaries {
            args.push("--base-dict".into());
            args.push(dictionary.into());
        }
        args.extend(self.files.iter().map(OsString::from));
        args
    }
}

impl Tool for ScSpell {
    fn name(&self) -> &'static str {
        "scspell"
    }

    fn execute(&self) -> Result<ToolOutput, ToolError> {
        if let Some(missing) = self.dictionaries.iter().find(|d| !d.is_file()) {
            return Err(ToolError::MissingFile(missing.clone()));
        }

        let mut cmd = command_for(&self.binary);
        cmd.args(self.args());
        run_captured(self.name(), &mut cmd)
    }
}
