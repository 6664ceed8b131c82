//! Navigation-link validation on the landing page: internal links, external
//! links, and advert skip links. Each group's hrefs are collected, resolved
//! to absolute URLs, and checked with the relative-URL retry enabled.

use tokio::time::sleep;
use tracing::warn;

use crate::catalog;
use crate::config::RunConfig;
use crate::error::Result;
use crate::links::{self, StatusFetcher};
use crate::page::PageDriver;
use crate::report::SuiteReport;

pub async fn run<D: PageDriver, F: StatusFetcher>(
    driver: &D,
    fetcher: &F,
    cfg: &RunConfig,
) -> SuiteReport {
    let mut report = SuiteReport::new("links", &cfg.tenant.tenant_id);

    for test_id in catalog::NAV_LINK_TEST_IDS {
        if let Err(e) = check_link_group(driver, fetcher, cfg, test_id, &mut report).await {
            warn!("Link validation failed for {}: {}", test_id, e);
            report.annotate("Driver Error", format!("{test_id}: {e}"));
            report.passed = false;
        }
    }

    report
}

async fn check_link_group<D: PageDriver, F: StatusFetcher>(
    driver: &D,
    fetcher: &F,
    cfg: &RunConfig,
    test_id: &str,
    report: &mut SuiteReport,
) -> Result<()> {
    let base = cfg.tenant.absolute_url("/")?;
    driver.navigate(&base).await?;
    sleep(cfg.page_settle).await;

    let urls = links::collect_urls(driver, cfg, test_id, "href").await?;
    let batch = links::check_links(fetcher, cfg, &urls, true).await;
    if !batch.passed() {
        report.passed = false;
    }
    report.annotations.extend(batch.annotations);

    Ok(())
}
