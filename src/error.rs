// src/error.rs
use thiserror::Error;

/// Everything that can go wrong while crawling or exporting.
///
/// Article fetch failures are deliberately not classified further: callers only
/// ever see the message.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Headless Chrome failed (launch, navigation, element lookup, ...).
    #[error("browser: {0}")]
    Browser(String),

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bad url: {0}")]
    Url(#[from] url::ParseError),

    #[error("bad selector: {0}")]
    Selector(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("template: {0}")]
    Template(#[from] askama::Error),
}

impl CrawlError {
    pub fn browser(e: impl std::fmt::Display) -> Self {
        CrawlError::Browser(e.to_string())
    }
}

pub type Result<T, E = CrawlError> = std::result::Result<T, E>;
