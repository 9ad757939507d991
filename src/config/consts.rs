// src/config/consts.rs

// Net config
pub const SITE_ROOT: &str = "https://sillok.history.go.kr";
pub const SEARCH_PATH: &str = "/search/searchResultList.do";
pub const USER_AGENT: &str = concat!("sillok_crawler/", env!("CARGO_PKG_VERSION"));

// Browser
pub const CANDIDATE_WAIT_SECS: u64 = 10;

// Pagination progress bar: this many references count as "full"
pub const PROGRESS_SCALE: usize = 1000;

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FILE_PREFIX: &str = "실록_검색어";
pub const HTML_TITLE: &str = "조선왕조실록";
