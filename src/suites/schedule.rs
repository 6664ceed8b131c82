//! Schedule-page structural check: enumerate the direct children of the
//! schedule list container and verify opponent/time, game-date and location
//! element groups for every non-skipped child.
//!
//! Verification failures here are soft signals (warnings + annotations);
//! only driver/navigation errors fail the suite.

use tokio::time::sleep;
use tracing::{info, warn};

use crate::catalog;
use crate::config::RunConfig;
use crate::error::Result;
use crate::page::{PageDriver, PageElement, Selector};
use crate::report::{PageReport, SuiteReport};
use crate::verify::{verify_any, verify_tiered};

pub async fn run<D: PageDriver>(driver: &D, cfg: &RunConfig) -> SuiteReport {
    let mut report = SuiteReport::new("schedule", &cfg.tenant.tenant_id);

    for path in catalog::schedule_paths(&cfg.tenant.tenant_id) {
        match check_schedule_page(driver, cfg, path).await {
            Ok(page) => report.push_page(page),
            Err(e) => {
                warn!("Schedule check failed for {}: {}", path, e);
                report.annotate("Driver Error", format!("{path}: {e}"));
                report.passed = false;
            }
        }
    }

    report
}

async fn check_schedule_page<D: PageDriver>(
    driver: &D,
    cfg: &RunConfig,
    path: &str,
) -> Result<PageReport> {
    let url = cfg.tenant.absolute_url(path)?;
    info!("Testing URL: {}", url);
    driver.navigate(&url).await?;
    sleep(cfg.page_settle).await;

    let mut page = PageReport::new(path);

    let mut roots = driver
        .locate(&Selector::xpath(catalog::SCHEDULE_LIST_ROOT))
        .await?;
    if roots.is_empty() {
        warn!("Schedule list container not found on {}", path);
        page.annotate("Missing List", format!("No schedule list container on {path}"));
        return Ok(page);
    }
    let root = roots.remove(0);

    let items = root.locate(&Selector::xpath("./*")).await?;
    page.items_seen = items.len();
    info!("Found {} list items", items.len());

    let skips = catalog::skip_indexes(&cfg.tenant.tenant_id, path);

    for (index, item) in items.iter().enumerate() {
        if skips.contains(&index) {
            warn!(
                "Skipping verification for tenant: {}, URL: {}, index: {}",
                cfg.tenant.tenant_id, path, index
            );
            continue;
        }

        info!("Verifying list item {} of {}", index + 1, items.len());
        page.items_verified += 1;

        for group in catalog::LIST_ITEM_SELECTOR_GROUPS {
            if !verify_tiered(item, group, cfg).await.is_verified() {
                warn!(
                    "Element failed verification for selectors starting at {}",
                    group.primary
                );
                page.annotate(
                    "Verification Failed",
                    format!("item {index}: {}", group.primary),
                );
            }
        }

        if !verify_any(item, catalog::GAME_DATE_SELECTOR_GROUPS, cfg)
            .await
            .is_verified()
        {
            warn!("Game date not found for list item {}", index + 1);
            page.annotate("Verification Failed", format!("item {index}: game date"));
        }

        if !verify_any(item, catalog::LOCATION_SELECTOR_GROUPS, cfg)
            .await
            .is_verified()
        {
            warn!("Location not found for list item {}", index + 1);
            page.annotate("Verification Failed", format!("item {index}: location"));
        }
    }

    Ok(page)
}
