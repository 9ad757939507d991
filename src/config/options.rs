// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::data::SearchQuery;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub crawl: CrawlOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Origin used both for browser navigation and for resolving article hrefs.
    pub site_root: String,
    /// How long each selector candidate gets before we move to the next one.
    pub wait: Duration,
    /// Stop after this many result pages. `None` = until the site runs dry.
    pub max_pages: Option<u32>,
    pub headless: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            site_root: s!(SITE_ROOT),
            wait: Duration::from_secs(CANDIDATE_WAIT_SECS),
            max_pages: None,
            headless: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Html,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Empty text keeps the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(crate::file::normalize_separators(s))
        };
    }

    /// `<out_dir>/실록_검색어_<query>_<tab>.<ext>`
    pub fn out_path(&self, query: &SearchQuery, format: ExportFormat) -> PathBuf {
        let stem = crate::core::sanitize::file_stem(&query.text, query.page_type.label());
        self.out_dir.join(format!("{stem}.{}", format.ext()))
    }
}
