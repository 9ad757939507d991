// tests/common/mod.rs
//
// Scripted browser, article source and progress sink for crawl tests.
#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
    time::Duration,
};

use sillok_crawler::browser::{Anchor, Locator, Session};
use sillok_crawler::core::ArticleSource;
use sillok_crawler::error::{CrawlError, Result};
use sillok_crawler::progress::Progress;
use sillok_crawler::specs::search;

pub const ROOT: &str = "https://sillok.history.go.kr";

/// What one result page looks like to the browser.
#[derive(Clone, Debug, Default)]
pub struct PageScript {
    pub tab: bool,
    pub list: bool,
    pub anchors: Vec<Anchor>,
}

impl PageScript {
    pub fn with_links(hrefs: &[&str]) -> Self {
        Self { tab: true, list: true, anchors: hrefs.iter().map(|h| link(h)).collect() }
    }
    pub fn no_tab() -> Self {
        Self { tab: false, list: false, anchors: Vec::new() }
    }
    pub fn no_list() -> Self {
        Self { tab: true, list: false, anchors: Vec::new() }
    }
}

pub fn link(href: &str) -> Anchor {
    Anchor { href: Some(href.to_string()), outer_html: format!("<a href=\"{href}\">x</a>") }
}

pub fn bare_anchor() -> Anchor {
    Anchor { href: None, outer_html: "<a>no href</a>".to_string() }
}

/// Observations the test reads after the session has been consumed.
#[derive(Debug, Default)]
pub struct SessionLog {
    pub navigated: Vec<String>,
    pub clicked: Vec<Locator>,
    pub closed: usize,
}

pub struct ScriptedSession {
    pages: Vec<PageScript>,
    /// Locators that never show up, to exercise fallbacks
    hidden: Vec<Locator>,
    /// In the page but not clickable (hidden by CSS)
    inert: Vec<Locator>,
    /// Anchor positions that error when read
    broken_anchors: Vec<usize>,
    /// Pages whose navigation fails
    broken_pages: Vec<usize>,
    broken_click: bool,
    current: usize,
    log: Rc<RefCell<SessionLog>>,
}

impl ScriptedSession {
    pub fn new(pages: Vec<PageScript>) -> (Self, Rc<RefCell<SessionLog>>) {
        let log = Rc::new(RefCell::new(SessionLog::default()));
        let session = Self {
            pages,
            hidden: Vec::new(),
            inert: Vec::new(),
            broken_anchors: Vec::new(),
            broken_pages: Vec::new(),
            broken_click: false,
            current: 0,
            log: log.clone(),
        };
        (session, log)
    }

    pub fn hide(mut self, locator: Locator) -> Self {
        self.hidden.push(locator);
        self
    }

    pub fn inert(mut self, locator: Locator) -> Self {
        self.inert.push(locator);
        self
    }

    pub fn fail_anchor(mut self, index: usize) -> Self {
        self.broken_anchors.push(index);
        self
    }

    pub fn fail_navigate(mut self, page: usize) -> Self {
        self.broken_pages.push(page);
        self
    }

    pub fn fail_click(mut self) -> Self {
        self.broken_click = true;
        self
    }

    fn page(&self) -> PageScript {
        self.current
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .cloned()
            .unwrap_or_else(PageScript::no_tab)
    }
}

impl Session for ScriptedSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        let parsed = url::Url::parse(url)?;
        self.current = parsed
            .query_pairs()
            .find(|(k, _)| k == "pageIndex")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(0);
        self.log.borrow_mut().navigated.push(url.to_string());
        if self.broken_pages.contains(&self.current) {
            return Err(CrawlError::Browser("navigation timed out".to_string()));
        }
        Ok(())
    }

    fn current_url(&self) -> String {
        self.log.borrow().navigated.last().cloned().unwrap_or_default()
    }

    fn page_source(&self) -> Result<String> {
        Ok(format!("<html><body>page {}</body></html>", self.current))
    }

    fn is_present(&self, locator: &Locator, _wait: Duration) -> bool {
        if self.hidden.contains(locator) || self.inert.contains(locator) {
            return false;
        }
        let page = self.page();
        if search::result_list_locators().contains(locator) { page.list } else { page.tab }
    }

    fn click(&mut self, locator: &Locator) -> Result<String> {
        if self.broken_click || self.inert.contains(locator) {
            return Err(CrawlError::Browser(format!("{locator} is not clickable")));
        }
        self.log.borrow_mut().clicked.push(*locator);
        Ok(" 국역 ".to_string())
    }

    fn anchors(&self, _container: &Locator) -> Result<Vec<Result<Anchor>>> {
        let anchors = self
            .page()
            .anchors
            .into_iter()
            .enumerate()
            .map(|(i, a)| {
                if self.broken_anchors.contains(&i) {
                    Err(CrawlError::Browser("stale element".to_string()))
                } else {
                    Ok(a)
                }
            })
            .collect();
        Ok(anchors)
    }

    fn close(&mut self) {
        self.log.borrow_mut().closed += 1;
    }
}

/// In-memory article pages keyed by absolute URL. Unknown URLs fail.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn with_article(mut self, path: &str, volume: &str, body: &str) -> Self {
        let html = format!(
            "<html><body><div class=\"tit_loc\">{volume}</div><p class=\"paragraph\">{body}</p></body></html>"
        );
        self.pages.insert(format!("{ROOT}{path}"), html);
        self
    }
}

impl ArticleSource for FakeSite {
    fn get(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| CrawlError::from(std::io::Error::other(format!("404 {url}"))))
    }
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub logs: Vec<String>,
    pub warnings: Vec<String>,
    pub markups: Vec<String>,
    pub done: Vec<String>,
    pub finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) {
        self.logs.push(msg.to_string());
    }
    fn warn(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }
    fn markup(&mut self, source: &str) {
        self.markups.push(source.to_string());
    }
    fn item_done(&mut self, url: &str) {
        self.done.push(url.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
