//! # Site "specs"
//!
//! Everything that knows what the search site looks like lives here:
//! URLs, selector candidates, and how an article page turns into a row.
//!
//! - `search` – result-list pages: search URL per page index, the tab and
//!   result-list locator candidates, href → absolute article URL.
//! - `article` – article pages: `.tit_loc` → volume/year label,
//!   `.paragraph` → body text.
//!
//! No I/O happens here. The browser and the HTTP client are driven from
//! `scrape`; specs only build URLs and read markup, so they are testable offline
//! against captured HTML.
pub mod article;
pub mod search;
