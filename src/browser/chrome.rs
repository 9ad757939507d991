// src/browser/chrome.rs
//
// Session backed by a local Chrome/Chromium driven over CDP.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use tracing::{debug, info, warn};

use super::{Anchor, Locator, Session};
use crate::config::options::CrawlOptions;
use crate::error::{CrawlError, Result};

// The element was already resolved; this only covers re-finding it.
const REFIND_WAIT: Duration = Duration::from_secs(2);

const CLICKABLE_POLL: Duration = Duration::from_millis(200);

pub struct ChromeSession {
    browser: Option<Browser>,
    tab: Arc<Tab>,
}

impl ChromeSession {
    pub fn launch(options: &CrawlOptions) -> Result<Self> {
        let launch = LaunchOptions::default_builder()
            .headless(options.headless)
            .build()
            .map_err(CrawlError::browser)?;

        let browser = Browser::new(launch).map_err(CrawlError::browser)?;
        let tab = browser.new_tab().map_err(CrawlError::browser)?;

        info!(headless = options.headless, "browser launched");
        Ok(Self { browser: Some(browser), tab })
    }

    fn find(&self, locator: &Locator, wait: Duration) -> Result<Element<'_>> {
        let found = match locator {
            Locator::Css(css) => self.tab.wait_for_element_with_custom_timeout(css, wait),
            Locator::XPath(xpath) => self.tab.wait_for_xpath_with_custom_timeout(xpath, wait),
        };
        found.map_err(CrawlError::browser)
    }
}

/// `get_attributes` hands back a flat [name, value, name, value, ...] list.
fn attribute(el: &Element<'_>, name: &str) -> Result<Option<String>> {
    let attrs = el
        .get_attributes()
        .map_err(CrawlError::browser)?
        .unwrap_or_default();

    Ok(attrs
        .chunks(2)
        .find(|pair| pair[0] == name)
        .and_then(|pair| pair.get(1).cloned()))
}

impl Session for ChromeSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.tab.navigate_to(url).map_err(CrawlError::browser)?;
        self.tab.wait_until_navigated().map_err(CrawlError::browser)?;
        Ok(())
    }

    fn current_url(&self) -> String {
        self.tab.get_url()
    }

    fn page_source(&self) -> Result<String> {
        self.tab.get_content().map_err(CrawlError::browser)
    }

    /// In the DOM is not enough: hidden elements have no box model and cannot
    /// be clicked, so keep polling until one appears or `wait` runs out.
    fn is_present(&self, locator: &Locator, wait: Duration) -> bool {
        let deadline = Instant::now() + wait;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.find(locator, left) {
                Ok(el) if el.get_box_model().is_ok() => return true,
                Ok(_) => debug!(%locator, "present but not clickable yet"),
                Err(_) => return false,
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(CLICKABLE_POLL);
        }
    }

    fn click(&mut self, locator: &Locator) -> Result<String> {
        let el = self.find(locator, REFIND_WAIT)?;
        let text = el.get_inner_text().unwrap_or_default();
        el.click().map_err(CrawlError::browser)?;

        // Tab switches reload the result list; nothing to wait for if they don't.
        if let Err(e) = self.tab.wait_until_navigated() {
            debug!("no navigation after click: {e}");
        }
        Ok(text)
    }

    fn anchors(&self, container: &Locator) -> Result<Vec<Result<Anchor>>> {
        let list = self.find(container, REFIND_WAIT)?;
        let links = list.find_elements("a").map_err(CrawlError::browser)?;

        Ok(links
            .iter()
            .map(|link| {
                let href = attribute(link, "href")?;
                let outer_html = link.get_content().unwrap_or_default();
                Ok(Anchor { href, outer_html })
            })
            .collect())
    }

    fn close(&mut self) {
        let Some(browser) = self.browser.take() else { return };

        if let Err(e) = self.tab.close(true) {
            warn!("closing tab failed: {e}");
        }
        drop(browser); // kills the child process
        info!("browser closed");
    }
}
