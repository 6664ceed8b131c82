use sitecheck::catalog::*;

#[test]
fn test_skip_indexes_for_mens_soccer_schedule() {
    let indices = skip_indexes("syracuse", "/sports/mens-soccer/schedule");
    assert_eq!(indices, &[0, 1, 4, 5, 6, 8, 9, 11, 12, 14, 16, 19]);

    // Lookup ignores a leading slash
    let indices = skip_indexes("syracuse", "sports/mens-soccer/schedule");
    assert_eq!(indices.len(), 12);
}

#[test]
fn test_skip_indexes_apply_to_syracuse_only() {
    assert!(skip_indexes("libertyuni", "/sports/mens-soccer/schedule").is_empty());
    assert!(skip_indexes("syracuse", "/sports/volleyball/schedule").is_empty());
}

#[test]
fn test_path_catalogs_per_tenant() {
    assert!(!schedule_paths("syracuse").is_empty());
    assert!(!schedule_paths("libertyuni").is_empty());
    assert!(!roster_paths("syracuse").is_empty());
    assert!(!roster_paths("libertyuni").is_empty());

    // The rowing roster is configured for syracuse and exempt from link checks
    assert!(roster_paths("syracuse").contains(&"/sports/rowing/roster"));
    assert!(ROSTER_LINK_CHECK_EXEMPT_PATHS.contains(&"/sports/rowing/roster"));
}

#[test]
fn test_selector_groups_declared_order() {
    assert_eq!(LIST_ITEM_SELECTOR_GROUPS.len(), 2);
    let opponent = &LIST_ITEM_SELECTOR_GROUPS[0];
    assert!(opponent.primary.contains("header-team-opponent-link"));
    assert_eq!(opponent.fallbacks.len(), 1);
    assert!(opponent.fallbacks[0].contains("header-opponent-link-alt"));

    let location = &LOCATION_SELECTOR_GROUPS[0];
    assert_eq!(location.fallbacks.len(), 2);
    assert!(location.fallbacks[0].contains("game-facility-title-link"));
    assert!(location.fallbacks[1].contains("standard-facility-title"));
}

#[test]
fn test_all_selectors_key_on_test_id_attributes() {
    let mut all = vec![SCHEDULE_LIST_ROOT];
    for group in LIST_ITEM_SELECTOR_GROUPS
        .iter()
        .chain(GAME_DATE_SELECTOR_GROUPS)
        .chain(LOCATION_SELECTOR_GROUPS)
    {
        all.push(group.primary);
        all.extend(group.fallbacks);
    }
    all.extend(ROSTER_SELECTORS);

    for selector in all {
        assert!(
            selector.contains("data-test-id"),
            "selector not keyed on data-test-id: {selector}"
        );
    }
}

#[test]
fn test_roster_selector_count() {
    assert_eq!(ROSTER_SELECTORS.len(), 6);
    assert!(ROSTER_SELECTORS
        .iter()
        .any(|s| s.contains(CALL_TO_ACTION_TEST_ID)));
}

#[test]
fn test_nav_and_image_test_ids() {
    assert_eq!(
        NAV_LINK_TEST_IDS,
        &[
            "nav-link__root--link-internal",
            "nav-link__root--link-external",
            "s-advert__skip-link",
        ]
    );
    assert_eq!(IMAGE_TEST_IDS.len(), 2);
}
