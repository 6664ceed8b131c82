//! fantoccini-backed implementation of the page driver traits.
//!
//! One WebDriver session serves the whole run; suites share it and must not
//! assume isolation from each other's navigation side effects.

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};

use crate::error::Result;
use crate::page::{PageDriver, PageElement, Selector};

pub struct WebDriverPage {
    client: Client,
}

impl WebDriverPage {
    /// Connect to a WebDriver endpoint with the suite's browser profile:
    /// headless Chrome, 1280x720, certificate errors ignored.
    pub async fn connect(webdriver_url: &str) -> Result<Self> {
        let mut caps = Capabilities::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            serde_json::json!({
                "args": [
                    "--headless=new",
                    "--window-size=1280,720",
                    "--ignore-certificate-errors",
                ]
            }),
        );

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;
        Ok(WebDriverPage { client })
    }

    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

fn to_locator(selector: &Selector) -> Locator<'_> {
    match selector {
        Selector::Css(s) => Locator::Css(s),
        Selector::XPath(s) => Locator::XPath(s),
    }
}

/// WebDriver evaluates an element-scoped XPath starting with `//` against
/// the whole document; rewrite it to `.//` so the search stays inside the
/// scope element.
fn scoped(selector: &Selector) -> Selector {
    match selector {
        Selector::XPath(s) if s.starts_with("//") => Selector::XPath(format!(".{s}")),
        other => other.clone(),
    }
}

pub struct WebDriverElement {
    client: Client,
    element: Element,
}

#[async_trait]
impl PageDriver for WebDriverPage {
    type Element = WebDriverElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn locate(&self, selector: &Selector) -> Result<Vec<WebDriverElement>> {
        let elements = self.client.find_all(to_locator(selector)).await?;
        Ok(wrap(&self.client, elements))
    }
}

fn wrap(client: &Client, elements: Vec<Element>) -> Vec<WebDriverElement> {
    elements
        .into_iter()
        .map(|element| WebDriverElement {
            client: client.clone(),
            element,
        })
        .collect()
}

#[async_trait]
impl PageElement for WebDriverElement {
    async fn locate(&self, selector: &Selector) -> Result<Vec<WebDriverElement>> {
        let selector = scoped(selector);
        let elements = self.element.find_all(to_locator(&selector)).await?;
        Ok(wrap(&self.client, elements))
    }

    async fn attr(&self, name: &str) -> Result<Option<String>> {
        Ok(self.element.attr(name).await?)
    }

    async fn is_visible(&self) -> Result<bool> {
        Ok(self.element.is_displayed().await?)
    }

    async fn scroll_into_view(&self) -> Result<()> {
        // WebDriver has no scroll command; element handles serialize into
        // script arguments.
        let arg = serde_json::to_value(&self.element)?;
        self.client
            .execute("arguments[0].scrollIntoView({block: 'center'});", vec![arg])
            .await?;
        Ok(())
    }
}
