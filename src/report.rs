use std::path::Path;

use serde::Serialize;
use tracing::warn;

/// Structured annotation carried alongside a verdict: the diagnostic detail
/// the checker produces in addition to pass/fail.
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub kind: String,
    pub detail: String,
}

impl Annotation {
    pub fn new(kind: impl Into<String>, detail: impl Into<String>) -> Self {
        Annotation {
            kind: kind.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub path: String,
    pub passed: bool,
    pub items_seen: usize,
    pub items_verified: usize,
    pub annotations: Vec<Annotation>,
}

impl PageReport {
    pub fn new(path: &str) -> Self {
        PageReport {
            path: path.to_string(),
            passed: true,
            items_seen: 0,
            items_verified: 0,
            annotations: Vec::new(),
        }
    }

    pub fn annotate(&mut self, kind: &str, detail: impl Into<String>) {
        self.annotations.push(Annotation::new(kind, detail));
    }
}

#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub suite: String,
    pub tenant: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub passed: bool,
    pub pages: Vec<PageReport>,
    pub annotations: Vec<Annotation>,
}

impl SuiteReport {
    pub fn new(suite: &str, tenant: &str) -> Self {
        SuiteReport {
            suite: suite.to_string(),
            tenant: tenant.to_string(),
            started_at: chrono::Utc::now(),
            passed: true,
            pages: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn annotate(&mut self, kind: &str, detail: impl Into<String>) {
        self.annotations.push(Annotation::new(kind, detail));
    }

    /// Fold a page result in: the suite fails if the page failed.
    pub fn push_page(&mut self, page: PageReport) {
        if !page.passed {
            self.passed = false;
        }
        self.pages.push(page);
    }
}

/// Write the collected suite reports as pretty JSON. A write failure is a
/// warning, not an error: the verdict has already been computed.
pub fn save_report(path: &Path, reports: &[SuiteReport]) {
    match serde_json::to_string_pretty(reports) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                warn!("Failed to save report to {:?}: {}", path, e);
            }
        }
        Err(e) => {
            warn!("Failed to serialize report: {}", e);
        }
    }
}
