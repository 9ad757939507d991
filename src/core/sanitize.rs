// src/core/sanitize.rs

/// Drop tab, CR and LF. Ordinary spaces are kept as-is.
pub fn trimmed(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\t' | '\r' | '\n')).collect()
}

/// One `.tit_loc` fragment → "권수 : <text with 기사 → 기사 / 연차 : >".
pub fn volume_fragment(raw: &str) -> String {
    join!("권수 : ", &trimmed(raw).replace("기사", "기사 / 연차 : "))
}

/// Replace characters that no common filesystem accepts in a file name.
/// Hangul/Hanja pass through untouched.
pub fn filename_component(s: &str) -> String {
    let out: String = s
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if out.is_empty() { s!("_") } else { out }
}

/// "실록_검색어_<query>_<tab>"
pub fn file_stem(query: &str, tab_label: &str) -> String {
    format!(
        "{}_{}_{}",
        crate::config::consts::FILE_PREFIX,
        filename_component(query),
        tab_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_drops_only_tab_cr_lf() {
        assert_eq!(trimmed("a\tb\r\nc"), "abc");
        assert_eq!(trimmed(" a b "), " a b ");
        assert_eq!(trimmed("\n\t\r"), "");
    }

    #[test]
    fn volume_fragment_expands_every_article_marker() {
        assert_eq!(
            volume_fragment("태조실록 1권, 총서 1번째기사"),
            "권수 : 태조실록 1권, 총서 1번째기사 / 연차 : "
        );
        assert_eq!(
            volume_fragment("기사\n기사"),
            "권수 : 기사 / 연차 : 기사 / 연차 : "
        );
        assert_eq!(volume_fragment(""), "권수 : ");
    }

    #[test]
    fn filename_component_keeps_hangul() {
        assert_eq!(filename_component("세종/훈민정음?"), "세종_훈민정음_");
        assert_eq!(filename_component("   "), "_");
        assert_eq!(file_stem("세종", "국역"), "실록_검색어_세종_국역");
    }
}
