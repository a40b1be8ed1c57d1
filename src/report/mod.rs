mod policy;
mod source;

pub use policy::{reconcile, Outcome, ReportResult};
pub use source::{RawInput, ReportKind};

use source::RawResult;

use crate::bitbucket::Publisher;
use crate::config::ReportTarget;
use crate::error::{BitbucketError, ParserError, SourceError};
use crate::parser::{parse_annotations, AnnotationSet};
use serde::Serialize;

/// `{base}/rest/insights/1.0/projects/{project}/repos/{repo}/commits/{commit}/reports/{key}`
///
/// Components are joined as given; nothing is URL-encoded.
pub fn build_report_address(
    base_url: &str,
    project_key: &str,
    repo_slug: &str,
    commit_id: &str,
    report_key: &str,
) -> String {
    format!(
        "{}/rest/insights/1.0/projects/{}/repos/{}/commits/{}/reports/{}",
        base_url, project_key, repo_slug, commit_id, report_key
    )
}

/// Body of the report PUT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBody<'a> {
    pub title: &'a str,
    pub details: &'a str,
    pub result: ReportResult,
}

/// One Code Insight report: resolved outcome plus its annotations.
#[derive(Debug, Clone)]
pub struct Report {
    url: String,
    title: String,
    description: String,
    outcome: Outcome,
    annotations: AnnotationSet,
}

impl Report {
    pub fn new(
        target: &ReportTarget,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: &ReportKind,
        raw: RawResult,
        force_pass: bool,
    ) -> Result<Self, ParserError> {
        let title = title.into();
        let annotations =
            parse_annotations(&kind.annotation_format(&title), Some(raw.text.as_str()))?;

        Ok(Self {
            url: build_report_address(
                &target.base_url,
                &target.project_key,
                &target.repo_slug,
                &target.commit_id,
                &target.report_key,
            ),
            title,
            description: description.into(),
            outcome: reconcile(force_pass, raw.return_code, raw.result),
            annotations,
        })
    }

    /// Collect raw input for `kind` and build the report from it.
    pub fn from_input(
        target: &ReportTarget,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: &ReportKind,
        input: RawInput,
        force_pass: bool,
    ) -> Result<Self, SourceError> {
        let raw = kind.collect(input)?;
        Ok(Self::new(target, title, description, kind, raw, force_pass)?)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn annotations_url(&self) -> String {
        format!("{}/annotations", self.url)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    pub fn body(&self) -> ReportBody<'_> {
        ReportBody {
            title: &self.title,
            details: &self.description,
            result: self.outcome.status,
        }
    }

    /// PUT the report itself, without annotations.
    pub fn publish_status(&self, publisher: &dyn Publisher) -> Result<(), BitbucketError> {
        publisher.put_report(&self.url, &self.body())
    }

    /// POST the annotations to `{report}/annotations`.
    pub fn publish_annotations(&self, publisher: &dyn Publisher) -> Result<(), BitbucketError> {
        publisher.post_annotations(&self.annotations_url(), &self.annotations)
    }
}
