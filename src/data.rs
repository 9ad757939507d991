// src/data.rs
//
// Crawl inputs and outputs.
//
// - SearchQuery: what the user asked for; fixed for one run.
// - ArticleReference: absolute article URL found while paginating.
// - ArticleRecord / ResultTable: parsed rows, in discovery order, exported verbatim.

use std::fmt;

/// One of the two result views the search site offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageType {
    /// 국역: modern Korean translation (first tab)
    Translated,
    /// 원문: original classical Chinese text (second tab)
    Original,
}

impl PageType {
    pub const ALL: [PageType; 2] = [PageType::Translated, PageType::Original];

    /// Site label, also used in export file names.
    pub fn label(&self) -> &'static str {
        match self {
            PageType::Translated => "국역",
            PageType::Original => "원문",
        }
    }

    /// 1-based position of the tab in the result tab strip.
    pub fn tab_index(&self) -> usize {
        match self {
            PageType::Translated => 1,
            PageType::Original => 2,
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub page_type: PageType,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, page_type: PageType) -> Self {
        Self { text: text.into(), page_type }
    }
}

/// Absolute URL of a single article page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleReference(String);

impl ArticleReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleRecord {
    /// "권수 : … 기사 / 연차 : …"; empty when the page has no `.tit_loc`
    pub volume_label: String,
    /// Joined `.paragraph` text; empty when there is none
    pub body_text: String,
    pub url: String,
}

impl ArticleRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![self.volume_label.clone(), self.body_text.clone(), self.url.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    records: Vec<ArticleRecord>,
}

impl ResultTable {
    pub const HEADERS: [&'static str; 3] = ["권수와 연차", "내용", "URL"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Rows are only ever appended.
    pub fn push(&mut self, record: ArticleRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    #[inline] pub fn len(&self) -> usize { self.records.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn headers(&self) -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Stringly rows for the CSV/HTML writers.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(ArticleRecord::to_row).collect()
    }
}

impl From<Vec<ArticleRecord>> for ResultTable {
    fn from(records: Vec<ArticleRecord>) -> Self {
        Self { records }
    }
}
