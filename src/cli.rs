// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::options::{AppOptions, ExportFormat};
use crate::data::{PageType, SearchQuery};
use crate::error::Result;
use crate::progress::Progress;

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Crawl the Annals of the Joseon Dynasty search site")]
pub struct Args {
    /// Search term
    pub query: String,

    /// Result tab to crawl
    #[arg(long, value_enum, default_value_t = Tab::Translated)]
    pub tab: Tab,

    /// Output directory for exports
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Both)]
    pub format: Format,

    /// Stop after this many result pages
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Seconds each selector candidate gets
    #[arg(long, default_value_t = crate::config::consts::CANDIDATE_WAIT_SECS)]
    pub wait_secs: u64,

    /// Run Chrome with a visible window
    #[arg(long)]
    pub show_browser: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    /// 국역
    Translated,
    /// 원문
    Original,
}

impl From<Tab> for PageType {
    fn from(t: Tab) -> Self {
        match t {
            Tab::Translated => PageType::Translated,
            Tab::Original => PageType::Original,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Html,
    Both,
}

impl Format {
    fn formats(self) -> &'static [ExportFormat] {
        match self {
            Format::Csv => &[ExportFormat::Csv],
            Format::Html => &[ExportFormat::Html],
            Format::Both => &[ExportFormat::Csv, ExportFormat::Html],
        }
    }
}

impl Args {
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.query.trim(), self.tab.into())
    }

    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.crawl.wait = Duration::from_secs(self.wait_secs);
        opts.crawl.max_pages = self.max_pages;
        opts.crawl.headless = !self.show_browser;
        if let Some(dir) = &self.out {
            opts.export.set_dir(&dir.to_string_lossy());
        }
        opts
    }
}

/// Feed lines go to stderr so stdout only carries the written paths.
struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.done = 0;
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn warn(&mut self, msg: &str) {
        eprintln!("Warning: {msg}");
    }
    fn markup(&mut self, source: &str) {
        eprintln!("----- page source -----\n{source}\n-----------------------");
    }
    fn item_done(&mut self, url: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {url}", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let query = args.query();
    let opts = args.options();

    if query.text.is_empty() {
        eprintln!("Warning: please enter a search term");
        return Ok(());
    }

    let mut prog = ConsoleProgress { done: 0, total: 0 };
    let outcome = crate::runner::run_crawl(&query, &opts.crawl, Some(&mut prog))?;
    eprintln!("Found {} result(s) in total.", outcome.table.len());

    let written = crate::file::write_exports(&opts.export, &query, &outcome.table, args.format.formats())?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_map_onto_options() {
        let args = Args::parse_from(["cli", " 세종 ", "--tab", "original", "--max-pages", "2", "--show-browser"]);
        let q = args.query();
        assert_eq!(q.text, "세종");
        assert_eq!(q.page_type, PageType::Original);

        let opts = args.options();
        assert_eq!(opts.crawl.max_pages, Some(2));
        assert!(!opts.crawl.headless);
        assert_eq!(opts.crawl.wait, Duration::from_secs(10));
        assert_eq!(args.format.formats().len(), 2);
    }
}
