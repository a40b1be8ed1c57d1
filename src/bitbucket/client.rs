//! Blocking HTTP client for the Bitbucket Server Code Insights REST API

use super::Publisher;
use crate::config::Credentials;
use crate::error::BitbucketError;
use crate::parser::AnnotationSet;
use crate::report::ReportBody;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

pub struct InsightsClient {
    http: Client,
    credentials: Credentials,
}

impl InsightsClient {
    pub fn new(credentials: Credentials, timeout: Duration) -> Result<Self, BitbucketError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("code-insight-reports/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(BitbucketError::Client)?;

        Ok(Self { http, credentials })
    }

    fn send_json<T: Serialize + ?Sized>(
        &self,
        request: RequestBuilder,
        url: &str,
        body: &T,
    ) -> Result<(), BitbucketError> {
        let resp = request
            .basic_auth(&self.credentials.user, Some(&self.credentials.password))
            .json(body)
            .send()
            .map_err(|source| BitbucketError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        debug!("{} -> HTTP {}", url, status);

        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(BitbucketError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        Ok(())
    }
}

impl Publisher for InsightsClient {
    fn put_report(&self, url: &str, body: &ReportBody<'_>) -> Result<(), BitbucketError> {
        info!("Publishing report ({}) to {}", body.result, url);
        self.send_json(self.http.put(url), url, body)
    }

    fn post_annotations(
        &self,
        url: &str,
        annotations: &AnnotationSet,
    ) -> Result<(), BitbucketError> {
        info!("Publishing {} annotations to {}", annotations.len(), url);
        self.send_json(self.http.post(url), url, annotations)
    }
}
