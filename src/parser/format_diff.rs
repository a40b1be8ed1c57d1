use super::annotation::{Annotation, AnnotationSet, Severity};
use super::diff::{file_blocks, hunk_start_lines};
use regex::Regex;
use std::sync::LazyLock;

pub const FORMAT_DIFF_MESSAGE: &str = "Error found in this block. Run `terraform fmt --diff -check` to see the issue (or run without `-check` to fix automatically)";

// A bare path line followed by the `---` / `+++` pair.
static FILE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(.*)\n---.*\n\+\+\+.*").expect("format diff header pattern is valid")
});

/// Parse `terraform fmt -check -diff` style output: one annotation per hunk.
pub fn parse(raw: &str) -> AnnotationSet {
    file_blocks(raw, &FILE_HEADER, |caps| caps.get(1).map(|m| m.as_str()))
        .into_iter()
        .flat_map(|block| {
            hunk_start_lines(block.body)
                .into_iter()
                .map(move |line| {
                    Annotation::new(block.path, line, FORMAT_DIFF_MESSAGE, Severity::High)
                })
        })
        .collect()
}
