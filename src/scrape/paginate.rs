// src/scrape/paginate.rs
//
// Walk the search-result pages with the browser and collect article URLs.
//
//   FetchingPage(N) ──tab found, clicked──▶ TabSelected(N) ──list found──▶ ListFound(N)
//        ▲                                                                   │
//        └───────────── page added references, N += 1 ◀────────────────────┘
//
// Any missing tab/list or browser failure ends in Aborted (with a markup dump);
// an empty or unproductive page ends in Done. Both keep what was collected.

use std::fmt;

use tracing::{info, warn};

use crate::browser::{resolve_first, Anchor, Locator, Session};
use crate::config::consts::PROGRESS_SCALE;
use crate::config::options::CrawlOptions;
use crate::data::{ArticleReference, PageType, SearchQuery};
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::search;

/// Why pagination stopped normally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DoneReason {
    /// The result list had no anchors at all.
    NoLinks,
    /// Nothing collected so far, and this page did not change that.
    NoResults,
    /// The page had anchors but none produced a reference.
    NothingNew,
    /// `max_pages` reached.
    PageLimit,
}

/// Why pagination gave up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbortReason {
    TabNotFound(PageType),
    ListNotFound,
    Browser(String),
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::TabNotFound(pt) => write!(f, "{pt} tab not found"),
            AbortReason::ListNotFound => f.write_str("article list not found"),
            AbortReason::Browser(e) => write!(f, "browser error: {e}"),
        }
    }
}

/// Terminal state of the pagination loop. `page` is the page it ended on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEnd {
    Done { page: u32, reason: DoneReason },
    Aborted { page: u32, reason: AbortReason },
}

impl PageEnd {
    pub fn is_aborted(&self) -> bool {
        matches!(self, PageEnd::Aborted { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub references: Vec<ArticleReference>,
    pub end: PageEnd,
}

enum State {
    FetchingPage,
    TabSelected,
    ListFound(&'static Locator),
    Finished(PageEnd),
}

pub fn paginate<S>(
    session: &mut S,
    query: &SearchQuery,
    options: &CrawlOptions,
    progress: &mut dyn Progress,
) -> Pagination
where
    S: Session + ?Sized,
{
    let mut references: Vec<ArticleReference> = Vec::new();
    let mut page = 1u32;
    let mut state = State::FetchingPage;

    let end = loop {
        state = match state {
            State::FetchingPage => open_page(session, query, options, page, progress),

            State::TabSelected => {
                match resolve_first(&*session, search::result_list_locators(), options.wait) {
                    Some(list) => State::ListFound(list),
                    None => abort(&*session, progress, page, AbortReason::ListNotFound),
                }
            }

            State::ListFound(list) => match session.anchors(list) {
                Err(e) => abort(&*session, progress, page, AbortReason::Browser(e.to_string())),
                Ok(anchors) => {
                    progress.log(&format!("Page {page}: {} link(s) found", anchors.len()));
                    info!(page, links = anchors.len(), "result list read");

                    if anchors.is_empty() {
                        progress.warn(&format!("No links found on page {page}, stopping"));
                        State::Finished(PageEnd::Done { page, reason: DoneReason::NoLinks })
                    } else {
                        let found = read_links(anchors, &options.site_root, progress);
                        let added = found.len();
                        references.extend(found);
                        progress.log(&format!("{} result(s) found", references.len()));

                        match after_page(page, added, references.len(), options, progress) {
                            Some(end) => State::Finished(end),
                            None => {
                                page += 1;
                                State::FetchingPage
                            }
                        }
                    }
                }
            },

            State::Finished(end) => break end,
        };
    };

    info!(?end, references = references.len(), "pagination finished");
    Pagination { references, end }
}

/// Load page N, pick the result tab and click it.
fn open_page<S>(
    session: &mut S,
    query: &SearchQuery,
    options: &CrawlOptions,
    page: u32,
    progress: &mut dyn Progress,
) -> State
where
    S: Session + ?Sized,
{
    let opened = search::search_url(&options.site_root, &query.text, page)
        .and_then(|url| session.navigate(&url));
    if let Err(e) = opened {
        return abort(&*session, progress, page, AbortReason::Browser(e.to_string()));
    }
    progress.log(&format!("Current URL: {}", session.current_url()));

    let Some(tab) = resolve_first(&*session, search::tab_locators(query.page_type), options.wait)
    else {
        return abort(&*session, progress, page, AbortReason::TabNotFound(query.page_type));
    };

    match session.click(tab) {
        Ok(text) => {
            progress.log(&format!("Selected tab: {}", text.trim()));
            State::TabSelected
        }
        Err(e) => abort(&*session, progress, page, AbortReason::Browser(e.to_string())),
    }
}

/// Decide what follows a processed page. `None` means "go to the next page".
fn after_page(
    page: u32,
    added: usize,
    total: usize,
    options: &CrawlOptions,
    progress: &mut dyn Progress,
) -> Option<PageEnd> {
    if total == 0 {
        progress.warn("No results found, stopping");
        return Some(PageEnd::Done { page, reason: DoneReason::NoResults });
    }
    if added == 0 {
        progress.log(&format!("Page {page} added nothing new, stopping"));
        return Some(PageEnd::Done { page, reason: DoneReason::NothingNew });
    }

    progress.advance((total as f32 / PROGRESS_SCALE as f32).min(1.0));

    if options.max_pages.is_some_and(|max| page >= max) {
        progress.log(&format!("Page limit {page} reached, stopping"));
        return Some(PageEnd::Done { page, reason: DoneReason::PageLimit });
    }
    None
}

/// Turn the anchors of one page into references. A bad anchor is reported and
/// skipped; it never ends the page.
pub fn read_links(
    anchors: Vec<Result<Anchor>>,
    site_root: &str,
    progress: &mut dyn Progress,
) -> Vec<ArticleReference> {
    let mut out = Vec::with_capacity(anchors.len());

    for anchor in anchors {
        let anchor = match anchor {
            Ok(a) => a,
            Err(e) => {
                warn!("link skipped: {e}");
                progress.warn(&format!("Error while reading a link: {e}"));
                continue;
            }
        };

        let resolved = match anchor.href.as_deref() {
            Some(href) => search::article_reference(site_root, href),
            None => Ok(None),
        };

        match resolved {
            Ok(Some(reference)) => out.push(reference),
            Ok(None) => {
                warn!(html = %anchor.outer_html, "link without href");
                progress.warn(&format!("Could not extract a URL from link: {}", anchor.outer_html));
            }
            Err(e) => {
                warn!(html = %anchor.outer_html, "link with bad href: {e}");
                progress.warn(&format!("Error while reading a link: {e}"));
            }
        }
    }
    out
}

fn abort<S>(session: &S, progress: &mut dyn Progress, page: u32, reason: AbortReason) -> State
where
    S: Session + ?Sized,
{
    warn!(page, %reason, "pagination aborted");
    progress.warn(&format!("Page {page}: {reason}. Dumping page source."));

    match session.page_source() {
        Ok(source) => progress.markup(&source),
        Err(e) => warn!("page source unavailable: {e}"),
    }
    State::Finished(PageEnd::Aborted { page, reason })
}
