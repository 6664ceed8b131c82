use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;
use url::Url;

use crate::error::{Result, SiteCheckError};

/// sitecheck — drives a browser over configured sports-site pages and
/// verifies that elements render and link targets resolve.
#[derive(Parser, Debug, Clone)]
#[command(name = "sitecheck")]
pub struct CliArgs {
    /// Tenant to run against (falls back to the TENANT env var, then the default tenant)
    #[arg(short = 't', long = "tenant")]
    pub tenant: Option<String>,

    /// WebDriver endpoint
    #[arg(long = "webdriver", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver: String,

    /// Suite to run (repeatable); defaults to all suites
    #[arg(short = 's', long = "suite", value_enum)]
    pub suites: Vec<SuiteName>,

    /// Write the full JSON report to this file
    #[arg(long = "report-file")]
    pub report_file: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuiteName {
    Schedule,
    Roster,
    Links,
    Images,
}

impl SuiteName {
    pub fn all() -> &'static [SuiteName] {
        &[
            SuiteName::Schedule,
            SuiteName::Roster,
            SuiteName::Links,
            SuiteName::Images,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuiteName::Schedule => "schedule",
            SuiteName::Roster => "roster",
            SuiteName::Links => "links",
            SuiteName::Images => "images",
        }
    }
}

pub const DEFAULT_TENANT: &str = "syracuse";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const TENANT_ENV_VAR: &str = "TENANT";

// Tenant map: (tenant id, base URL)
pub const TENANT_BASE_URLS: &[(&str, &str)] = &[
    ("libertyuni", "https://libertyflames.com/"),
    ("syracuse", "https://cuse.com/"),
];

// Timing constants
pub const PAGE_SETTLE_MS: u64 = 3000;
pub const VISIBILITY_TIMEOUT_SECS: u64 = 20;
pub const VISIBILITY_POLL_MS: u64 = 250;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_DELAY_MS: u64 = 500;

/// The single active tenant for a run. Constructed once and passed to every
/// collaborator; there is no process-wide resolved base URL.
#[derive(Debug, Clone)]
pub struct TenantConfig {
    pub tenant_id: String,
    pub base_url: String,
}

impl TenantConfig {
    /// Resolve a tenant id to its base URL. An unknown tenant degrades to an
    /// empty base URL: navigation then fails fast and surfaces the cause.
    pub fn resolve(tenant_id: &str) -> Self {
        let base_url = match TENANT_BASE_URLS.iter().find(|(id, _)| *id == tenant_id) {
            Some((_, url)) => (*url).to_string(),
            None => {
                error!("Unknown tenant '{}'; base URL left empty", tenant_id);
                String::new()
            }
        };
        TenantConfig {
            tenant_id: tenant_id.to_string(),
            base_url,
        }
    }

    /// Pick the active tenant: explicit argument, then the TENANT env var,
    /// then the default tenant.
    pub fn from_env(cli_tenant: Option<&str>) -> Self {
        let tenant = cli_tenant
            .map(str::to_string)
            .or_else(|| std::env::var(TENANT_ENV_VAR).ok())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TENANT.to_string());
        Self::resolve(&tenant)
    }

    /// Resolve an href/src value to an absolute URL against the base URL.
    /// Already-absolute values pass through unchanged.
    pub fn absolute_url(&self, href: &str) -> Result<String> {
        if self.base_url.is_empty() {
            return Err(SiteCheckError::EmptyBaseUrl);
        }
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(href)?.to_string())
    }

    /// Strip the base-URL prefix, producing the relative form used by the
    /// link-check retry. URLs outside the base pass through unchanged.
    pub fn relative_form(&self, url: &str) -> String {
        if self.base_url.is_empty() {
            return url.to_string();
        }
        url.strip_prefix(&self.base_url)
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string())
    }
}

/// Per-run configuration handed to every suite. Timings default to the
/// constants above; tests inject zero durations via [`RunConfig::immediate`].
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub tenant: TenantConfig,
    pub page_settle: Duration,
    pub visibility_timeout: Duration,
    pub visibility_poll: Duration,
    pub request_timeout: Duration,
    pub request_delay: Duration,
}

impl RunConfig {
    pub fn new(tenant: TenantConfig) -> Self {
        RunConfig {
            tenant,
            page_settle: Duration::from_millis(PAGE_SETTLE_MS),
            visibility_timeout: Duration::from_secs(VISIBILITY_TIMEOUT_SECS),
            visibility_poll: Duration::from_millis(VISIBILITY_POLL_MS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            request_delay: Duration::from_millis(REQUEST_DELAY_MS),
        }
    }

    /// Same semantics with every wait collapsed to zero. A zero visibility
    /// timeout still checks visibility exactly once.
    #[allow(dead_code)]
    pub fn immediate(tenant: TenantConfig) -> Self {
        RunConfig {
            tenant,
            page_settle: Duration::ZERO,
            visibility_timeout: Duration::ZERO,
            visibility_poll: Duration::ZERO,
            request_timeout: Duration::from_secs(1),
            request_delay: Duration::ZERO,
        }
    }
}
