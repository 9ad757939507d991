// src/runner.rs
//
// Wires the real browser and HTTP client into `scrape::crawl`.
// GUI and CLI both come through here.

use tracing::info;

use crate::{
    browser::ChromeSession,
    config::options::CrawlOptions,
    core::HttpClient,
    data::SearchQuery,
    error::Result,
    progress::Progress,
    scrape::{self, CrawlOutcome},
};

/// Launch Chrome, crawl, close Chrome.
/// Only setup failures are errors; everything after that degrades to warnings.
pub fn run_crawl(
    query: &SearchQuery,
    options: &CrawlOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<CrawlOutcome> {
    info!(site = %options.site_root, max_pages = ?options.max_pages, "runner: setup");

    let source = HttpClient::new()?;
    let session = ChromeSession::launch(options)?;

    Ok(scrape::crawl(session, &source, query, options, progress))
}
