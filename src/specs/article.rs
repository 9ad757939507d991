// src/specs/article.rs
//
// Article page → one row.
//
//   <span class="tit_loc">태조실록 1권, 총서 1번째기사</span>   → volume_label
//   <p class="paragraph">…</p> (one or more)                → body_text

use scraper::Html;

use crate::core::html::select_map;
use crate::core::sanitize::{trimmed, volume_fragment};
use crate::data::ArticleRecord;
use crate::error::Result;

const TITLE_LOC: &str = ".tit_loc";
const PARAGRAPH: &str = ".paragraph";

pub fn parse(html: &str, url: &str) -> Result<ArticleRecord> {
    let doc = Html::parse_document(html);

    let volume_label = select_map(&doc, TITLE_LOC, volume_fragment)?.join(" ");
    let body_text = select_map(&doc, PARAGRAPH, trimmed)?.join(" ");

    Ok(ArticleRecord { volume_label, body_text, url: s!(url) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_and_body_are_joined_with_spaces() {
        let html = concat!(
            "<html><body>\n",
            "<span class=\"tit_loc\">태조실록 1권,\n\t총서 1번째기사</span>\n",
            "<span class=\"tit_loc\">太祖實錄</span>\n",
            "<p class=\"paragraph\">첫째\t문단</p>\n",
            "<p class=\"paragraph\">둘째 <b>문단</b>\r\n</p>\n",
            "</body></html>",
        );

        let rec = parse(html, "https://example/a").unwrap();
        assert_eq!(
            rec.volume_label,
            "권수 : 태조실록 1권,총서 1번째기사 / 연차 :  권수 : 太祖實錄"
        );
        assert_eq!(rec.body_text, "첫째문단 둘째 문단");
        assert_eq!(rec.url, "https://example/a");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let rec = parse("<html><body><p>nothing here</p></body></html>", "u").unwrap();
        assert_eq!(rec.volume_label, "");
        assert_eq!(rec.body_text, "");
    }
}
