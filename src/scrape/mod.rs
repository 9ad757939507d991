// src/scrape/mod.rs
//
// The crawl: paginate with the browser, then fetch articles over HTTP.

mod fetch;
mod paginate;

pub use fetch::fetch_articles;
pub use paginate::{paginate, read_links, AbortReason, DoneReason, PageEnd, Pagination};

use tracing::info;

use crate::browser::{Session, SessionGuard};
use crate::config::options::CrawlOptions;
use crate::core::ArticleSource;
use crate::data::{ArticleReference, ResultTable, SearchQuery};
use crate::progress::{NullProgress, Progress};

#[derive(Clone, Debug)]
pub struct CrawlOutcome {
    /// Every URL collected, in discovery order.
    pub references: Vec<ArticleReference>,
    /// Rows for the articles that could be fetched.
    pub table: ResultTable,
    /// How pagination ended.
    pub end: PageEnd,
}

/// Run one crawl. The session is closed as soon as pagination is over,
/// whatever state it ended in.
pub fn crawl<S, A>(
    session: S,
    source: &A,
    query: &SearchQuery,
    options: &CrawlOptions,
    progress: Option<&mut dyn Progress>,
) -> CrawlOutcome
where
    S: Session,
    A: ArticleSource + ?Sized,
{
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    info!(query = %query.text, tab = %query.page_type, "crawl: begin");
    progress.log(&format!("Collecting {} search results…", query.page_type));

    let Pagination { references, end } = {
        let mut session = SessionGuard::new(session);
        paginate(&mut *session, query, options, progress)
    };

    progress.log("Collecting article contents…");
    let table = fetch_articles(&references, source, progress);
    progress.finish();

    info!(
        references = references.len(),
        rows = table.len(),
        aborted = end.is_aborted(),
        "crawl: done"
    );
    CrawlOutcome { references, table, end }
}
