use super::annotation::{Annotation, AnnotationSet, Severity};

/// Parse `path:line:message` records, one per line (scspell's report format).
///
/// The message keeps any further colons. Records with fewer than three
/// fields, a non-numeric line, or an empty path or message are skipped.
pub fn parse(raw: &str) -> AnnotationSet {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_record)
        .collect()
}

fn parse_record(record: &str) -> Option<Annotation> {
    let mut fields = record.splitn(3, ':');
    let path = fields.next()?.trim();
    let line = fields.next()?.trim().parse().ok()?;
    let message = fields.next()?.trim();

    if path.is_empty() || message.is_empty() {
        return None;
    }

    Some(Annotation::new(path, line, message, Severity::Low))
}
