// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use crate::error::{CrawlError, Result};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CrawlError::Selector(format!("{css}: {e}")))
}

/// All text below `el`, concatenated without separators (like DOM `textContent`).
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Map every element matching `css` through `f`, in document order.
pub fn select_map<F>(doc: &Html, css: &str, f: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> String,
{
    let sel = selector(css)?;
    Ok(doc.select(&sel).map(|el| f(&text_content(el))).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_flattens_children() {
        let doc = Html::parse_fragment(r#"<p class="x">a<b>b</b>c</p><p class="x">d</p>"#);
        let out = select_map(&doc, ".x", |t| t.to_uppercase()).unwrap();
        assert_eq!(out, vec!["ABC", "D"]);
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(selector("##"), Err(CrawlError::Selector(_))));
    }
}
