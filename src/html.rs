// src/html.rs
//
// Standalone HTML export of a ResultTable. Cells are escaped, then every literal
// occurrence of the search term is wrapped in a highlight span.

use askama::Template;

use crate::config::consts::HTML_TITLE;
use crate::data::ResultTable;
use crate::error::Result;

const HIGHLIGHT_OPEN: &str =
    "<span style='font-size:medium; font-weight:bold; text-decoration: underline;'>";
const HIGHLIGHT_CLOSE: &str = "</span>";

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsPage<'a> {
    title: &'a str,
    /// Already escaped + highlighted
    headers: Vec<String>,
    /// Already escaped + highlighted
    rows: Vec<Vec<String>>,
}

#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
struct Escaped<'a> {
    text: &'a str,
}

/// HTML-escape with the same rules the page template uses.
pub fn escape(text: &str) -> Result<String> {
    Ok(Escaped { text }.render()?)
}

/// Wrap every occurrence of `needle` (escaped form) in the highlight span.
/// An empty needle highlights nothing.
pub fn highlight(escaped: &str, needle: &str) -> String {
    if needle.is_empty() {
        return s!(escaped);
    }
    escaped.replace(needle, &join!(HIGHLIGHT_OPEN, needle, HIGHLIGHT_CLOSE))
}

pub fn render(table: &ResultTable, query: &str) -> Result<String> {
    let needle = escape(query)?;
    let cell = |text: &str| -> Result<String> { Ok(highlight(&escape(text)?, &needle)) };

    let headers = table
        .headers()
        .iter()
        .map(|h| cell(h))
        .collect::<Result<Vec<_>>>()?;

    let rows = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|c| cell(c)).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;

    Ok(ResultsPage { title: HTML_TITLE, headers, rows }.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ArticleRecord;

    fn one_row(body: &str) -> ResultTable {
        ResultTable::from(vec![ArticleRecord {
            volume_label: s!("권수 : 세종실록"),
            body_text: s!(body),
            url: s!("https://sillok.history.go.kr/id/x"),
        }])
    }

    #[test]
    fn query_is_highlighted_in_cells() {
        let out = render(&one_row("세종이 말하기를 세종"), "세종").unwrap();
        let span = join!(HIGHLIGHT_OPEN, "세종", HIGHLIGHT_CLOSE);
        // label + body twice
        assert_eq!(out.matches(&span).count(), 3);
        assert!(out.contains("<title>조선왕조실록</title>"));
        assert!(out.contains("class=\"dataframe mystyle\""));
    }

    #[test]
    fn cell_text_is_escaped_before_highlighting() {
        let out = render(&one_row("<b>a & b</b>"), "a & b").unwrap();
        assert!(!out.contains("<b>a"));
        assert!(out.contains(&join!(HIGHLIGHT_OPEN, "a &amp; b", HIGHLIGHT_CLOSE)));
    }

    #[test]
    fn empty_query_leaves_table_alone() {
        let out = render(&one_row("본문"), "").unwrap();
        assert!(!out.contains(HIGHLIGHT_OPEN));
        assert!(out.contains("<td>본문</td>"));
    }

    #[test]
    fn rows_carry_a_zero_based_index() {
        let out = render(&one_row("x"), "q").unwrap();
        assert!(out.contains("<th>0</th>"));
    }
}
