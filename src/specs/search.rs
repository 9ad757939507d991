// src/specs/search.rs

use url::Url;

use crate::browser::Locator;
use crate::config::consts::SEARCH_PATH;
use crate::data::{ArticleReference, PageType};
use crate::error::Result;

const TRANSLATED_TAB: [Locator; 4] = [
    Locator::Css("#cont_area > div.cont_in_left > div.tab.clear2.responsive.tab_result > ul > li:nth-child(1) > a"),
    Locator::Css("#cont_area > div.cont_in_left > div.tab.clear2.responsive.tab_result > ul > li:nth-child(1)"),
    Locator::XPath("//*[@id='cont_area']/div[1]/div[2]/ul/li[1]/a"),
    Locator::XPath("//*[@id='cont_area']/div[1]/div[2]/ul/li[1]"),
];

const ORIGINAL_TAB: [Locator; 4] = [
    Locator::Css("#cont_area > div.cont_in_left > div.tab.clear2.responsive.tab_result > ul > li:nth-child(2) > a"),
    Locator::Css("#cont_area > div.cont_in_left > div.tab.clear2.responsive.tab_result > ul > li:nth-child(2)"),
    Locator::XPath("//*[@id='cont_area']/div[1]/div[2]/ul/li[2]/a"),
    Locator::XPath("//*[@id='cont_area']/div[1]/div[2]/ul/li[2]"),
];

const RESULT_LIST: [Locator; 3] = [
    Locator::Css("#cont_area > div.cont_in_left > ul.search_result.mt_15"),
    Locator::XPath("//*[@id='cont_area']/div[1]/ul[2]"),
    Locator::XPath("/html/body/div[2]/div[2]/form/div/div[1]/ul[2]"),
];

/// Tab candidates, most specific first.
pub fn tab_locators(page_type: PageType) -> &'static [Locator] {
    match page_type {
        PageType::Translated => &TRANSLATED_TAB,
        PageType::Original => &ORIGINAL_TAB,
    }
}

pub fn result_list_locators() -> &'static [Locator] {
    &RESULT_LIST
}

/// `<root>/search/searchResultList.do?topSearchWord=<query>&pageIndex=<page>`
pub fn search_url(site_root: &str, query: &str, page: u32) -> Result<String> {
    let mut url = Url::parse(site_root)?.join(SEARCH_PATH)?;
    url.query_pairs_mut()
        .append_pair("topSearchWord", query)
        .append_pair("pageIndex", &page.to_string());
    Ok(url.into())
}

/// Resolve a list href against the site root. Blank hrefs are not links.
pub fn article_reference(site_root: &str, href: &str) -> Result<Option<ArticleReference>> {
    let href = href.trim();
    if href.is_empty() {
        return Ok(None);
    }
    let url = Url::parse(site_root)?.join(href)?;
    Ok(Some(ArticleReference::new(url)))
}
