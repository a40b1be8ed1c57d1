mod annotation;
mod diff;
mod format_diff;
mod json;
mod line_diff;
mod token_flag;

pub use annotation::AnnotationSet;
#[cfg(test)]
pub use annotation::{Annotation, Severity};

use crate::error::ParserError;

/// The shapes of raw text a report can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationFormat {
    /// A ready-made annotations document (custom reports)
    Json,
    /// `terraform fmt -check -diff` output
    FormatDiff,
    /// `git diff` output; messages carry the report title
    LineDiff { title: String },
    /// `path:line:message` records (scspell)
    TokenFlag,
}

/// Extract annotations from raw tool output.
///
/// Missing or empty text always yields an empty set. Only the JSON format can
/// fail; the text formats skip whatever they cannot read.
pub fn parse_annotations(
    format: &AnnotationFormat,
    raw: Option<&str>,
) -> Result<AnnotationSet, ParserError> {
    let raw = raw.unwrap_or_default();

    match format {
        AnnotationFormat::Json => json::parse(raw),
        AnnotationFormat::FormatDiff => Ok(format_diff::parse(raw)),
        AnnotationFormat::LineDiff { title } => Ok(line_diff::parse(raw, title)),
        AnnotationFormat::TokenFlag => Ok(token_flag::parse(raw)),
    }
}
