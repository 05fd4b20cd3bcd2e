//! Helper functions for UI rendering
//!
//! Width-aware truncation and word wrapping. Widths are terminal cells as
//! reported by `unicode-width`, not chars or bytes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `width` cells, ending with "…" when cut.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wrap `text` into lines of at most `width` cells.
///
/// Existing newlines are kept. Words longer than `width` are split. Leading
/// tabs are expanded to two spaces.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let line = expand_tabs(raw_line);
        if line.width() <= width {
            lines.push(line);
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;
        for word in line.split(' ') {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }
        lines.push(current);
    }

    lines
}

fn expand_tabs(line: &str) -> String {
    line.replace('\t', "  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_short_text_unchanged() {
        assert_eq!(fit_width("hello", 10), "hello");
        assert_eq!(fit_width("hello", 5), "hello");
    }

    #[test]
    fn test_fit_width_truncates_with_ellipsis() {
        assert_eq!(fit_width("hello world", 6), "hello…");
        assert_eq!(fit_width("hello", 0), "");
        assert_eq!(fit_width("hello", 1), "…");
    }

    #[test]
    fn test_fit_width_wide_chars() {
        // Each CJK char takes two cells.
        let fitted = fit_width("日本語テキスト", 7);
        assert_eq!(fitted, "日本語…");
        assert!(fitted.width() <= 7);
    }

    #[test]
    fn test_wrap_text_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_text_keeps_newlines_and_tabs() {
        assert_eq!(wrap_text("a\n\tb", 10), vec!["a", "  b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let lines = wrap_text("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
        assert!(lines.iter().all(|l| l.width() <= 4));
    }

    #[test]
    fn test_wrap_text_cyrillic() {
        let lines = wrap_text("привет как дела", 10);
        assert_eq!(lines, vec!["привет как", "дела"]);
    }
}
