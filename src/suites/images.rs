//! Image-resource validation on the landing page: `src` targets of the SVG
//! and resized-image elements must resolve with an acceptable status. No
//! relative-URL retry for image sources.

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
    let mut report = SuiteReport::new("images", &cfg.tenant.tenant_id);

    for test_id in catalog::IMAGE_TEST_IDS {
        if let Err(e) = check_image_group(driver, fetcher, cfg, test_id, &mut report).await {
            warn!("Image validation failed for {}: {}", test_id, e);
            report.annotate("Driver Error", format!("{test_id}: {e}"));
            report.passed = false;
        }
    }

    report
}

async fn check_image_group<D: PageDriver, F: StatusFetcher>(
    driver: &D,
    fetcher: &F,
    cfg: &RunConfig,
    test_id: &str,
    report: &mut SuiteReport,
) -> Result<()> {
    let base = cfg.tenant.absolute_url("/")?;
    driver.navigate(&base).await?;
    sleep(cfg.page_settle).await;

    let urls = links::collect_urls(driver, cfg, test_id, "src").await?;
    let batch = links::check_links(fetcher, cfg, &urls, false).await;
    if !batch.passed() {
        report.passed = false;
    }
    report.annotations.extend(batch.annotations);

    Ok(())
}
