// src/core/net.rs
//
// Blocking HTTP GET for article pages. One request at a time, no retries.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::Result;

/// Anything that can hand back the HTML of an article page.
/// The crawl only depends on this, so tests can feed canned pages.
pub trait ArticleSource {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// The site serves an internally signed certificate, so validation is off.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { client })
    }
}

impl ArticleSource for HttpClient {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        debug!(url, status = %resp.status(), "article response");
        Ok(resp.text()?)
    }
}
