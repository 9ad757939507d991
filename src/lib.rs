// src/lib.rs

#[macro_use]
pub mod macros;

pub mod browser;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod html;
pub mod log;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use data::{ArticleRecord, ArticleReference, PageType, ResultTable, SearchQuery};
pub use error::CrawlError;
pub use scrape::{crawl, CrawlOutcome, PageEnd};
