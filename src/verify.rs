//! Tiered element verification: primary selector first, then each fallback
//! in declared order; the first visible match wins.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::catalog::SelectorGroup;
use crate::config::RunConfig;
use crate::page::{PageElement, Selector};

/// Outcome of a tiered verification, returned up the call chain so the
/// caller decides whether to assert. A `Failed` is a soft signal by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Some tier resolved to a visible element.
    Verified { selector: &'static str },
    Failed,
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified { .. })
    }
}

/// Poll an element's visibility until it reports visible or the bounded
/// timeout elapses. Checks at least once, so a zero timeout means a single
/// immediate check. Driver errors count as not-visible.
pub async fn wait_visible<E: PageElement>(element: &E, timeout: Duration, poll: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if element.is_visible().await.unwrap_or(false) {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        sleep(poll).await;
    }
}

/// Try the primary locator, then each fallback in declared order, all scoped
/// to `scope`. Per tier: a locator with zero matches is skipped without
/// waiting (a wait would be a guaranteed timeout); otherwise wait for
/// visibility, scroll into view, and confirm visible. First success
/// short-circuits; fallbacks are never evaluated after a visible primary.
pub async fn verify_tiered<E: PageElement>(
    scope: &E,
    group: &SelectorGroup,
    cfg: &RunConfig,
) -> Verification {
    let tiers = std::iter::once(group.primary).chain(group.fallbacks.iter().copied());

    for locator in tiers {
        let matches = match scope.locate(&Selector::xpath(locator)).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Locator query failed for {}: {}", locator, e);
                continue;
            }
        };

        let Some(element) = matches.into_iter().next() else {
            debug!("No match for {}, trying next tier", locator);
            continue;
        };

        if !wait_visible(&element, cfg.visibility_timeout, cfg.visibility_poll).await {
            warn!("Element never became visible for {}", locator);
            continue;
        }
        if let Err(e) = element.scroll_into_view().await {
            warn!("Scroll into view failed for {}: {}", locator, e);
            continue;
        }
        match element.is_visible().await {
            Ok(true) => return Verification::Verified { selector: locator },
            _ => {
                warn!("Element not visible after scroll for {}", locator);
            }
        }
    }

    Verification::Failed
}

/// "Any of the tier groups succeeds" variant, used for the game-date and
/// location checks on schedule pages.
pub async fn verify_any<E: PageElement>(
    scope: &E,
    groups: &[SelectorGroup],
    cfg: &RunConfig,
) -> Verification {
    for group in groups {
        let verification = verify_tiered(scope, group, cfg).await;
        if verification.is_verified() {
            return verification;
        }
    }
    Verification::Failed
}
