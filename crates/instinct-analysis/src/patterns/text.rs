//! Character-level helpers shared by the classifier and renderers.

use std::borrow::Cow;

/// CJK Unified Ideographs block.
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

pub fn contains_cjk(s: &str) -> bool {
    s.chars().any(is_cjk)
}

/// First `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Truncate to `max_chars` characters, appending `...` when anything was cut.
pub fn ellipsize(s: &str, max_chars: usize) -> Cow<'_, str> {
    let head = truncate_chars(s, max_chars);
    if head.len() == s.len() {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("{head}..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_range_boundaries() {
        assert!(is_cjk('一'));
        assert!(is_cjk('\u{9fff}'));
        assert!(!is_cjk('\u{3400}'));
        assert!(!is_cjk('a'));
        assert!(contains_cjk("run 测试 now"));
        assert!(!contains_cjk("plain ascii"));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("部署到生产环境", 2), "部署");
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(ellipsize("abcdef", 3), "abc...");
        assert_eq!(ellipsize("abc", 3), "abc");
    }
}
