use super::annotation::AnnotationSet;
use crate::error::ParserError;

/// Parse a custom report's annotations document, `{"annotations": [...]}`.
pub fn parse(raw: &str) -> Result<AnnotationSet, ParserError> {
    if raw.trim().is_empty() {
        return Ok(AnnotationSet::default());
    }
    Ok(serde_json::from_str(raw)?)
}
