use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width(""), 0);
        // CJK characters are double-width
        assert_eq!(display_width("\u{4ED8}"), 2);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello", 4), "hel\u{2026}");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_does_not_split_wide_chars() {
        // Two double-width chars = 4 cells; a 3-cell budget fits one + '…'
        let s = "\u{4ED8}\u{8CBB}";
        assert_eq!(truncate_to_width(s, 3), "\u{4ED8}\u{2026}");
    }

    #[test]
    fn test_grapheme_boundaries() {
        let s = "a\u{00E9}b"; // 'é' is 2 bytes
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(3));
        assert_eq!(next_grapheme_boundary(s, 3), Some(4));
        assert_eq!(next_grapheme_boundary(s, 4), None);
        assert_eq!(prev_grapheme_boundary(s, 4), Some(3));
        assert_eq!(prev_grapheme_boundary(s, 3), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 1), Some(0));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn test_combining_marks_stay_together() {
        // 'e' + combining acute forms one grapheme of 3 bytes
        let s = "e\u{0301}x";
        assert_eq!(next_grapheme_boundary(s, 0), Some(3));
        assert_eq!(prev_grapheme_boundary(s, 3), Some(0));
    }
}
