//! The browser capability set the verification logic depends on.
//!
//! Suites and the verifier only ever see these traits; the automation
//! runtime behind them is opaque. The live implementation is in
//! `webdriver.rs`, the tests drive mocks.

use async_trait::async_trait;

use crate::error::Result;

/// Locator for a DOM query. The raw string is what a driver implementation
/// hands to the underlying runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Css(String),
    XPath(String),
}

impl Selector {
    pub fn xpath(s: impl Into<String>) -> Self {
        Selector::XPath(s.into())
    }

    /// Attribute-equality selector for a `data-test-id` value.
    pub fn test_id(id: &str) -> Self {
        Selector::Css(format!("[data-test-id=\"{id}\"]"))
    }

    #[allow(dead_code)]
    pub fn raw(&self) -> &str {
        match self {
            Selector::Css(s) | Selector::XPath(s) => s,
        }
    }
}

/// Element handle exposed by a page driver.
#[async_trait]
pub trait PageElement: Send + Sync + Sized {
    /// Query within this element's subtree.
    async fn locate(&self, selector: &Selector) -> Result<Vec<Self>>;

    async fn attr(&self, name: &str) -> Result<Option<String>>;

    async fn is_visible(&self) -> Result<bool>;

    async fn scroll_into_view(&self) -> Result<()>;
}

#[async_trait]
pub trait PageDriver: Send + Sync {
    type Element: PageElement;

    async fn navigate(&self, url: &str) -> Result<()>;

    async fn locate(&self, selector: &Selector) -> Result<Vec<Self::Element>>;
}
