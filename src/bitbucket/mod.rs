mod client;

pub use client::InsightsClient;

use crate::error::BitbucketError;
use crate::parser::AnnotationSet;
use crate::report::ReportBody;

/// Sends report documents to the Code Insights API.
pub trait Publisher {
    fn put_report(&self, url: &str, body: &ReportBody<'_>) -> Result<(), BitbucketError>;

    fn post_annotations(&self, url: &str, annotations: &AnnotationSet)
        -> Result<(), BitbucketError>;
}
