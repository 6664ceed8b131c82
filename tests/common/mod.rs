// Mock page driver and status fetcher shared by the integration tests.
// Selectors are matched on their raw string; every query is recorded in a
// shared log so tests can assert evaluation order.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use sitecheck::error::Result;
use sitecheck::links::{FetchError, StatusFetcher};
use sitecheck::page::{PageDriver, PageElement, Selector};

pub type QueryLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> QueryLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[derive(Clone)]
pub struct MockElement {
    visible: bool,
    attrs: HashMap<String, String>,
    matches: HashMap<String, Vec<MockElement>>,
    log: QueryLog,
}

impl MockElement {
    pub fn visible(log: &QueryLog) -> Self {
        Self::build(true, log)
    }

    pub fn hidden(log: &QueryLog) -> Self {
        Self::build(false, log)
    }

    fn build(visible: bool, log: &QueryLog) -> Self {
        MockElement {
            visible,
            attrs: HashMap::new(),
            matches: HashMap::new(),
            log: log.clone(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_matches(mut self, selector: &str, matches: Vec<MockElement>) -> Self {
        self.matches.insert(selector.to_string(), matches);
        self
    }
}

#[async_trait]
impl PageElement for MockElement {
    async fn locate(&self, selector: &Selector) -> Result<Vec<MockElement>> {
        self.log.lock().unwrap().push(selector.raw().to_string());
        Ok(self.matches.get(selector.raw()).cloned().unwrap_or_default())
    }

    async fn attr(&self, name: &str) -> Result<Option<String>> {
        Ok(self.attrs.get(name).cloned())
    }

    async fn is_visible(&self) -> Result<bool> {
        Ok(self.visible)
    }

    async fn scroll_into_view(&self) -> Result<()> {
        Ok(())
    }
}

pub struct MockPage {
    matches: HashMap<String, Vec<MockElement>>,
    pub log: QueryLog,
    pub navigations: Mutex<Vec<String>>,
}

impl MockPage {
    pub fn new(log: &QueryLog) -> Self {
        MockPage {
            matches: HashMap::new(),
            log: log.clone(),
            navigations: Mutex::new(Vec::new()),
        }
    }

    pub fn with_matches(mut self, selector: &str, matches: Vec<MockElement>) -> Self {
        self.matches.insert(selector.to_string(), matches);
        self
    }

    pub fn navigated(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageDriver for MockPage {
    type Element = MockElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        self.navigations.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn locate(&self, selector: &Selector) -> Result<Vec<MockElement>> {
        self.log.lock().unwrap().push(selector.raw().to_string());
        Ok(self.matches.get(selector.raw()).cloned().unwrap_or_default())
    }
}

/// Scripted status fetcher: URL -> status, with optional scripted timeouts.
/// Unscripted URLs return a request error. Requested URLs are recorded in
/// order.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, u16>,
    timeouts: Vec<String>,
    pub requested: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        MockFetcher::default()
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), status);
        self
    }

    pub fn with_timeout(mut self, url: &str) -> Self {
        self.timeouts.push(url.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusFetcher for MockFetcher {
    async fn get_status(
        &self,
        url: &str,
        _timeout: Duration,
    ) -> std::result::Result<u16, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        if self.timeouts.iter().any(|u| u == url) {
            return Err(FetchError::Timeout);
        }
        self.responses
            .get(url)
            .copied()
            .ok_or_else(|| FetchError::Other(format!("no scripted response for {url}")))
    }
}
