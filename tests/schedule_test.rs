mod common;

use common::{new_log, MockElement, MockPage, QueryLog};

use sitecheck::catalog::{
    GAME_DATE_SELECTOR_GROUPS, LIST_ITEM_SELECTOR_GROUPS, LOCATION_SELECTOR_GROUPS,
    SCHEDULE_LIST_ROOT,
};
use sitecheck::config::{RunConfig, TenantConfig};
use sitecheck::suites::schedule;

fn immediate(tenant: &str) -> RunConfig {
    RunConfig::immediate(TenantConfig::resolve(tenant))
}

/// A schedule list item with visible elements for every verified group.
fn complete_item(log: &QueryLog) -> MockElement {
    MockElement::visible(log)
        .with_matches(
            LIST_ITEM_SELECTOR_GROUPS[0].primary,
            vec![MockElement::visible(log)],
        )
        .with_matches(
            LIST_ITEM_SELECTOR_GROUPS[1].primary,
            vec![MockElement::visible(log)],
        )
        .with_matches(
            GAME_DATE_SELECTOR_GROUPS[0].primary,
            vec![MockElement::visible(log)],
        )
        .with_matches(
            LOCATION_SELECTOR_GROUPS[0].primary,
            vec![MockElement::visible(log)],
        )
}

fn page_with_items(log: &QueryLog, items: Vec<MockElement>) -> MockPage {
    let root = MockElement::visible(log).with_matches("./*", items);
    MockPage::new(log).with_matches(SCHEDULE_LIST_ROOT, vec![root])
}

#[tokio::test]
async fn test_skip_indexes_leave_exactly_eight_items_verified() {
    // 20 children on /sports/mens-soccer/schedule; 12 indices are in the
    // syracuse skip table, so exactly 8 are verified.
    let log = new_log();
    let items: Vec<MockElement> = (0..20).map(|_| complete_item(&log)).collect();
    let page = page_with_items(&log, items);

    let report = schedule::run(&page, &immediate("syracuse")).await;

    assert!(report.passed);
    assert_eq!(report.pages[0].path, "/sports/mens-soccer/schedule");
    assert_eq!(report.pages[0].items_seen, 20);
    assert_eq!(report.pages[0].items_verified, 8);

    // Paths without a skip entry verify every child
    assert_eq!(report.pages[1].items_verified, 20);

    // Navigation used the resolved absolute URL
    assert_eq!(
        page.navigated()[0],
        "https://cuse.com/sports/mens-soccer/schedule"
    );
}

#[tokio::test]
async fn test_verification_failures_are_soft() {
    // Items missing the location element entirely: annotated and logged,
    // but the suite still passes (the caller does not assert on these).
    let log = new_log();
    let item = MockElement::visible(&log)
        .with_matches(
            LIST_ITEM_SELECTOR_GROUPS[0].primary,
            vec![MockElement::visible(&log)],
        )
        .with_matches(
            LIST_ITEM_SELECTOR_GROUPS[1].primary,
            vec![MockElement::visible(&log)],
        )
        .with_matches(
            GAME_DATE_SELECTOR_GROUPS[0].primary,
            vec![MockElement::visible(&log)],
        );
    let page = page_with_items(&log, vec![item]);

    let report = schedule::run(&page, &immediate("syracuse")).await;

    assert!(report.passed);
    let annotated: Vec<_> = report
        .pages
        .iter()
        .flat_map(|p| &p.annotations)
        .collect();
    assert!(!annotated.is_empty());
    assert!(annotated.iter().all(|a| a.kind == "Verification Failed"));
}

#[tokio::test]
async fn test_missing_list_container_is_annotated() {
    let log = new_log();
    let page = MockPage::new(&log);

    let report = schedule::run(&page, &immediate("syracuse")).await;

    // No container: soft signal, suite still passes
    assert!(report.passed);
    assert!(report
        .pages
        .iter()
        .all(|p| p.annotations.iter().any(|a| a.kind == "Missing List")));
}

#[tokio::test]
async fn test_unknown_tenant_fails_fast_without_panic() {
    let log = new_log();
    let page = MockPage::new(&log);

    let report = schedule::run(&page, &immediate("nowhere-state")).await;

    assert!(!report.passed);
    assert!(report.annotations.iter().any(|a| a.kind == "Driver Error"));
    // Navigation never happened: the empty base URL failed fast
    assert!(page.navigated().is_empty());
}
