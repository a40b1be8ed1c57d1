use crate::report::Report;
use std::fmt::Write;

/// Human-readable account of a report run.
pub fn render_summary(report: &Report, kind: &str) -> String {
    let outcome = report.outcome();
    let mut content = String::new();

    let _ = writeln!(content, "{} ({})", report.title(), kind);
    if !report.description().is_empty() {
        let _ = writeln!(content, "  {}", report.description());
    }
    let _ = writeln!(content, "  Result:      {}", outcome.status);
    let _ = writeln!(content, "  Exit code:   {}", outcome.exit_code);
    let _ = writeln!(content, "  Annotations: {}", report.annotations().len());

    for annotation in report.annotations().iter() {
        let _ = writeln!(
            content,
            "    [{}] {}:{} {}",
            annotation.severity(),
            annotation.path(),
            annotation.line(),
            annotation.message()
        );
    }

    content
}

/// The requests a real run would send, for `--dry-run`.
pub fn render_dry_run(report: &Report) -> Result<String, serde_json::Error> {
    let mut content = String::new();

    let _ = writeln!(content, "PUT {}", report.url());
    let _ = writeln!(content, "{}", serde_json::to_string_pretty(&report.body())?);
    let _ = writeln!(content, "POST {}", report.annotations_url());
    let _ = writeln!(
        content,
        "{}",
        serde_json::to_string_pretty(report.annotations())?
    );

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportTarget;
    use crate::report::{RawInput, ReportKind};

    fn report(text: &str, force_pass: bool) -> Report {
        Report::from_input(
            &ReportTarget {
                base_url: "http://bb".to_string(),
                project_key: "P".to_string(),
                repo_slug: "r".to_string(),
                commit_id: "c".to_string(),
                report_key: "spell".to_string(),
            },
            "Spelling",
            "scspell results",
            &ReportKind::SpellCheck,
            RawInput::Text(text.to_string()),
            force_pass,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_lists_annotations() {
        let summary = render_summary(&report("doc.md:4: 'teh' not found", false), "spell-check");

        assert!(summary.starts_with("Spelling (spell-check)\n"));
        assert!(summary.contains("Result:      FAIL"));
        assert!(summary.contains("Exit code:   1"));
        assert!(summary.contains("[LOW] doc.md:4 'teh' not found"));
    }

    #[test]
    fn test_dry_run_shows_both_requests() {
        let rendered = render_dry_run(&report("", false)).unwrap();

        assert!(rendered.contains("PUT http://bb/rest/insights/1.0/projects/P/repos/r/commits/c/reports/spell\n"));
        assert!(rendered.contains("\"result\": \"PASS\""));
        assert!(rendered.contains("POST http://bb/rest/insights/1.0/projects/P/repos/r/commits/c/reports/spell/annotations\n"));
        assert!(rendered.contains("\"annotations\": []"));
    }
}
