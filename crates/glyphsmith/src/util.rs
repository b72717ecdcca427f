//! Text measuring and clipping helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maximum number of characters the font generator accepts as input.
pub const MAX_INPUT_CHARS: usize = 150;

/// Keeps at most `max_chars` Unicode scalar values of `text`.
///
/// # Example
///
/// ```rust
/// use glyphsmith::clamp_chars;
///
/// assert_eq!(clamp_chars("héllo", 2), "hé");
/// assert_eq!(clamp_chars("hi", 10), "hi");
/// ```
pub fn clamp_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Truncates a string to fit within a display width, ending with `…` when cut.
///
/// Widths come from `unicode-width`, so mathematical alphanumerics count as
/// one column, fullwidth forms as two and combining marks as zero.
///
/// # Example
///
/// ```rust
/// use glyphsmith::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    // One column goes to the ellipsis.
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut end = 0;
    for (index, c) in s.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        end = index + c.len_utf8();
    }
    format!("{}…", &s[..end])
}

/// Pads `s` with spaces on the right up to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_chars_counts_scalars() {
        assert_eq!(clamp_chars("𝐀𝐁𝐂", 2), "𝐀𝐁");
        assert_eq!(clamp_chars("", 3), "");
        assert_eq!(clamp_chars("abc", 0), "");
    }

    #[test]
    fn test_clamp_chars_input_limit() {
        let long = "x".repeat(MAX_INPUT_CHARS + 20);
        assert_eq!(clamp_chars(&long, MAX_INPUT_CHARS).len(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }

    #[test]
    fn test_truncate_one_over() {
        assert_eq!(truncate_to_width("123456", 5), "1234…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("Hello", 0), "…");
    }

    #[test]
    fn test_truncate_keeps_combining_marks() {
        // Combining marks are zero-width and ride along with their base.
        let underlined = "a\u{0332}b\u{0332}c\u{0332}";
        assert_eq!(truncate_to_width(underlined, 3), underlined);
    }

    #[test]
    fn test_truncate_fullwidth() {
        assert_eq!(truncate_to_width("ＡＢＣ", 5), "ＡＢ…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("ＡＢ", 4), "ＡＢ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    }
}
