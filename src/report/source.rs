use super::policy::ReportResult;
use crate::error::SourceError;
use crate::parser::AnnotationFormat;
use crate::tools::Tool;
use std::path::{Path, PathBuf};

/// The closed set of report kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Caller-supplied status and annotations document
    Custom { status: ReportResult },
    /// `terraform fmt` check
    Terraform,
    /// Outstanding `git diff` changes
    GitDiff,
    /// scspell spell check
    SpellCheck,
}

/// Where a report's raw text comes from.
pub enum RawInput {
    Text(String),
    File(PathBuf),
    Tool(Box<dyn Tool>),
}

/// Tool-level verdict before reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResult {
    pub result: ReportResult,
    pub return_code: Option<i32>,
    pub text: String,
}

impl ReportKind {
    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Custom { .. } => "custom",
            ReportKind::Terraform => "terraform",
            ReportKind::GitDiff => "git-diff",
            ReportKind::SpellCheck => "spell-check",
        }
    }

    pub fn annotation_format(&self, title: &str) -> AnnotationFormat {
        match self {
            ReportKind::Custom { .. } => AnnotationFormat::Json,
            ReportKind::Terraform => AnnotationFormat::FormatDiff,
            ReportKind::GitDiff => AnnotationFormat::LineDiff {
                title: title.to_string(),
            },
            ReportKind::SpellCheck => AnnotationFormat::TokenFlag,
        }
    }

    /// Obtain the raw text and the tool-level result for this kind of report.
    pub fn collect(&self, input: RawInput) -> Result<RawResult, SourceError> {
        match input {
            RawInput::Text(text) => Ok(self.text_result(text)),
            RawInput::File(path) => Ok(self.text_result(read_file(&path)?)),
            RawInput::Tool(tool) => self.tool_result(tool.as_ref()),
        }
    }

    /// Captured output: the presence of content is the result.
    fn text_result(&self, text: String) -> RawResult {
        match self {
            ReportKind::Custom { status } => RawResult {
                result: *status,
                return_code: None,
                text,
            },
            ReportKind::Terraform => RawResult {
                result: ReportResult::from_passed(text.is_empty()),
                return_code: None,
                text,
            },
            ReportKind::GitDiff => {
                let passed = text.is_empty();
                RawResult {
                    result: ReportResult::from_passed(passed),
                    return_code: Some(if passed { 0 } else { 1 }),
                    text,
                }
            }
            ReportKind::SpellCheck => {
                let text = text.trim().to_string();
                RawResult {
                    result: ReportResult::from_passed(text.is_empty()),
                    return_code: None,
                    text,
                }
            }
        }
    }

    fn tool_result(&self, tool: &dyn Tool) -> Result<RawResult, SourceError> {
        match self {
            ReportKind::Custom { .. } => Err(SourceError::UnsupportedInput {
                kind: self.name(),
                input: "a tool",
            }),
            ReportKind::Terraform => {
                let output = tool.execute()?;
                Ok(RawResult {
                    result: ReportResult::from_passed(output.exit_code == 0),
                    return_code: Some(output.exit_code),
                    text: output.stdout,
                })
            }
            ReportKind::GitDiff => {
                let output = tool.execute()?;
                Ok(self.text_result(output.stdout))
            }
            // scspell reports on stderr and exits successfully when every word is known
            ReportKind::SpellCheck => {
                let output = tool.execute()?;
                Ok(RawResult {
                    result: ReportResult::from_passed(output.success()),
                    return_code: None,
                    text: output.stderr.trim().to_string(),
                })
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::tools::ToolOutput;
    use std::io::Write;

    struct FakeTool {
        output: ToolOutput,
    }

    impl FakeTool {
        fn boxed(exit_code: i32, stdout: &str, stderr: &str) -> RawInput {
            RawInput::Tool(Box::new(FakeTool {
                output: ToolOutput {
                    exit_code,
                    stdout: stdout.to_string(),
                    stderr: stderr.to_string(),
                },
            }))
        }
    }

    impl Tool for FakeTool {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn execute(&self) -> Result<ToolOutput, ToolError> {
            Ok(self.output.clone())
        }
    }

    struct BrokenTool;

    impl Tool for BrokenTool {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn execute(&self) -> Result<ToolOutput, ToolError> {
            Err(ToolError::NonZeroExit {
                tool: "broken",
                code: 128,
                stderr: "not a git repository".to_string(),
            })
        }
    }

    #[test]
    fn test_custom_keeps_given_status() {
        let raw = ReportKind::Custom {
            status: ReportResult::Fail,
        }
        .collect(RawInput::Text(String::new()))
        .unwrap();

        assert_eq!(raw.result, ReportResult::Fail);
        assert_eq!(raw.return_code, None);
    }

    #[test]
    fn test_custom_rejects_tool_input() {
        let err = ReportKind::Custom {
            status: ReportResult::Pass,
        }
        .collect(FakeTool::boxed(0, "", ""))
        .unwrap_err();

        assert!(matches!(err, SourceError::UnsupportedInput { kind: "custom", .. }));
    }

    #[test]
    fn test_terraform_tool_exit_code_decides() {
        let clean = ReportKind::Terraform
            .collect(FakeTool::boxed(0, "", ""))
            .unwrap();
        assert_eq!(clean.result, ReportResult::Pass);
        assert_eq!(clean.return_code, Some(0));

        let dirty = ReportKind::Terraform
            .collect(FakeTool::boxed(3, "main.tf\n--- old/main.tf\n+++ new/main.tf\n", ""))
            .unwrap();
        assert_eq!(dirty.result, ReportResult::Fail);
        assert_eq!(dirty.return_code, Some(3));
        assert!(dirty.text.starts_with("main.tf"));
    }

    #[test]
    fn test_terraform_exit_code_wins_over_output() {
        let raw = ReportKind::Terraform
            .collect(FakeTool::boxed(0, "main.tf\n", ""))
            .unwrap();
        assert_eq!(raw.result, ReportResult::Pass);
    }

    #[test]
    fn test_git_diff_content_decides() {
        let empty = ReportKind::GitDiff
            .collect(RawInput::Text(String::new()))
            .unwrap();
        assert_eq!(empty.result, ReportResult::Pass);
        assert_eq!(empty.return_code, Some(0));

        let changed = ReportKind::GitDiff
            .collect(FakeTool::boxed(0, "diff --git a/x b/x\n", ""))
            .unwrap();
        assert_eq!(changed.result, ReportResult::Fail);
        assert_eq!(changed.return_code, Some(1));
    }

    #[test]
    fn test_git_diff_tool_failure_propagates() {
        let err = ReportKind::GitDiff
            .collect(RawInput::Tool(Box::new(BrokenTool)))
            .unwrap_err();
        assert!(matches!(err, SourceError::Tool(ToolError::NonZeroExit { code: 128, .. })));
    }

    #[test]
    fn test_spell_check_success_is_pass() {
        let clean = ReportKind::SpellCheck
            .collect(FakeTool::boxed(0, "", ""))
            .unwrap();
        assert_eq!(clean.result, ReportResult::Pass);
        assert_eq!(clean.return_code, None);

        let dirty = ReportKind::SpellCheck
            .collect(FakeTool::boxed(1, "", "  a.md:3: 'teh' not found in dictionary\n\n"))
            .unwrap();
        assert_eq!(dirty.result, ReportResult::Fail);
        assert_eq!(dirty.text, "a.md:3: 'teh' not found in dictionary");
    }

    #[test]
    fn test_file_input_read_and_closed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "diff --git a/a b/a\n").unwrap();

        let raw = ReportKind::GitDiff
            .collect(RawInput::File(file.path().to_path_buf()))
            .unwrap();

        assert_eq!(raw.text, "diff --git a/a b/a\n");
        assert_eq!(raw.result, ReportResult::Fail);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ReportKind::GitDiff
            .collect(RawInput::File(PathBuf::from("/nonexistent/changes.diff")))
            .unwrap_err();
        assert!(matches!(err, SourceError::ReadFile { .. }));
    }

    #[test]
    fn test_annotation_format_per_kind() {
        assert_eq!(
            ReportKind::GitDiff.annotation_format("Lint"),
            AnnotationFormat::LineDiff {
                title: "Lint".to_string()
            }
        );
        assert_eq!(
            ReportKind::Terraform.annotation_format("Lint"),
            AnnotationFormat::FormatDiff
        );
        assert_eq!(
            ReportKind::SpellCheck.annotation_format("Lint"),
            AnnotationFormat::TokenFlag
        );
    }
}
