//! Resource/link status checker: GET every collected URL, accept 200/302,
//! annotate everything else, and retry non-conforming responses once
//! against the relative form of the URL for diagnostic detail.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::Result;
use crate::page::{PageDriver, PageElement, Selector};
use crate::report::Annotation;

pub const ACCEPTABLE_STATUSES: &[u16] = &[200, 302];

fn acceptable(status: u16) -> bool {
    ACCEPTABLE_STATUSES.contains(&status)
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// Minimal GET-for-status capability, injected so the checker runs against
/// mocks in tests.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn get_status(&self, url: &str, timeout: Duration)
        -> std::result::Result<u16, FetchError>;
}

/// reqwest-backed fetcher. Redirects are not followed, so a 302 is observed
/// as a 302 rather than as its target's status. Invalid certificates are
/// accepted, matching the browser profile.
pub struct HttpStatusFetcher {
    client: reqwest::Client,
}

impl HttpStatusFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(HttpStatusFetcher { client })
    }
}

#[async_trait]
impl StatusFetcher for HttpStatusFetcher {
    async fn get_status(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<u16, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Other(e.to_string())
                }
            })?;
        Ok(response.status().as_u16())
    }
}

/// Lifecycle state of one checked URL. `Retried` means the original
/// response was non-conforming and a relative-form retry was issued; the
/// original failure stands regardless of what the retry returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum LinkOutcome {
    Ok,
    Retried,
    Failed,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LinkRecord {
    pub url: String,
    pub status: Option<u16>,
    pub outcome: LinkOutcome,
}

#[derive(Debug, Default, serde::Serialize)]
pub struct BatchReport {
    pub records: Vec<LinkRecord>,
    pub annotations: Vec<Annotation>,
}

impl BatchReport {
    /// True iff every URL passed on its original request.
    pub fn passed(&self) -> bool {
        self.records.iter().all(|r| r.outcome == LinkOutcome::Ok)
    }
}

/// Probe each URL for an acceptable status, pacing requests with the
/// configured inter-request delay. When `retry_relative` is set, a
/// non-conforming response is re-probed against the relative form of the
/// URL; the retry outcome is annotated but never clears the original
/// failure.
pub async fn check_links<F: StatusFetcher>(
    fetcher: &F,
    cfg: &RunConfig,
    urls: &[String],
    retry_relative: bool,
) -> BatchReport {
    let mut report = BatchReport::default();

    for url in urls {
        // Pacing between requests, to stay under rate limits.
        sleep(cfg.request_delay).await;

        match fetcher.get_status(url, cfg.request_timeout).await {
            Ok(status) if acceptable(status) => {
                report.records.push(LinkRecord {
                    url: url.clone(),
                    status: Some(status),
                    outcome: LinkOutcome::Ok,
                });
            }
            Ok(status) => {
                warn!("URL {} returned unexpected status code {}", url, status);
                report.annotations.push(Annotation::new(
                    "Unexpected Status",
                    format!("URL: {url} returned status code: {status}"),
                ));

                let outcome = if retry_relative {
                    retry_with_relative(fetcher, cfg, url, &mut report.annotations).await;
                    LinkOutcome::Retried
                } else {
                    LinkOutcome::Failed
                };
                report.records.push(LinkRecord {
                    url: url.clone(),
                    status: Some(status),
                    outcome,
                });
            }
            Err(FetchError::Timeout) => {
                warn!("Timeout: request for URL {} took too long and was aborted", url);
                report.annotations.push(Annotation::new(
                    "Timeout",
                    format!("Request for URL {url} timed out"),
                ));
                report.records.push(LinkRecord {
                    url: url.clone(),
                    status: None,
                    outcome: LinkOutcome::Failed,
                });
            }
            Err(e) => {
                warn!("Failed to request URL {}: {}", url, e);
                report.annotations.push(Annotation::new(
                    "Request Error",
                    format!("Failed to request URL: {url}"),
                ));
                report.records.push(LinkRecord {
                    url: url.clone(),
                    status: None,
                    outcome: LinkOutcome::Failed,
                });
            }
        }
    }

    report
}

/// Diagnostic retry: re-issue the GET against the relative form of the URL
/// and annotate whatever comes back. Any HTTP status (100-599) is recorded
/// as informational; a request error is recorded as "no response". Neither
/// path changes the batch verdict.
async fn retry_with_relative<F: StatusFetcher>(
    fetcher: &F,
    cfg: &RunConfig,
    url: &str,
    annotations: &mut Vec<Annotation>,
) {
    let relative = cfg.tenant.relative_form(url);
    info!("Retrying with relative URL: {}", relative);

    match fetcher.get_status(&relative, cfg.request_timeout).await {
        Ok(retry_status) => {
            info!(
                "Server returned status code {} for relative URL: {}",
                retry_status, relative
            );
            annotations.push(Annotation::new(
                "Retry Status",
                format!("Server returned status code {retry_status} for relative URL: {relative}"),
            ));
        }
        Err(e) => {
            warn!("No valid response for relative URL {}: {}", relative, e);
            annotations.push(Annotation::new(
                "No Response",
                format!("No valid response received for relative URL: {relative}"),
            ));
        }
    }
}

/// Collect `attr_name` values from every element carrying `data_test_id`,
/// each resolved to an absolute URL against the tenant base before any
/// request is made. Elements without the attribute are logged and skipped.
pub async fn collect_urls<D: PageDriver>(
    driver: &D,
    cfg: &RunConfig,
    data_test_id: &str,
    attr_name: &str,
) -> Result<Vec<String>> {
    let elements = driver.locate(&Selector::test_id(data_test_id)).await?;
    let mut urls = Vec::new();

    for element in &elements {
        match element.attr(attr_name).await {
            Ok(Some(value)) => match cfg.tenant.absolute_url(&value) {
                Ok(absolute) => urls.push(absolute),
                Err(e) => {
                    warn!("Could not resolve {} value '{}': {}", attr_name, value, e);
                }
            },
            Ok(None) => {
                warn!(
                    "Element with data-test-id=\"{}\" has no {} attribute",
                    data_test_id, attr_name
                );
            }
            Err(e) => {
                warn!(
                    "Failed to read {} for element with data-test-id=\"{}\": {}",
                    attr_name, data_test_id, e
                );
            }
        }
    }

    info!(
        "Collected {} URLs for data-test-id=\"{}\"",
        urls.len(),
        data_test_id
    );
    Ok(urls)
}
