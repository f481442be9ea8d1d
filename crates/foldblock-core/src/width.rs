//! Visual length estimation.
//!
//! This is not a layout engine. Characters in the ASCII / Latin-1 range
//! occupy one column, everything else (CJK, full-width punctuation, emoji)
//! occupies two. That is close enough for sizing truncation thresholds
//! consistently across mixed scripts.

/// Highest code point that counts as a single column.
const LATIN_MAX: char = '\u{00FF}';

/// Check if a single character counts as width 1.
#[inline]
pub fn is_latin_char(c: char) -> bool {
    c <= LATIN_MAX
}

/// Visual width of one character: 1 for Latin, 2 for everything else.
#[inline]
pub fn char_width(c: char) -> usize {
    if is_latin_char(c) { 1 } else { 2 }
}

/// Get the visual length of a string.
///
/// Total over any input; the empty string has length 0 and every other
/// string has length at least 1.
pub fn visual_length(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Check if every character in the string is Latin (width 1).
///
/// The empty string counts as Latin.
pub fn is_latin(text: &str) -> bool {
    text.chars().all(is_latin_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_visual_length_ascii() {
        assert_eq!(visual_length(""), 0);
        assert_eq!(visual_length("hello"), 5);
        assert_eq!(visual_length("<br>"), 4);
    }

    #[test]
    fn test_visual_length_latin1() {
        // é, ñ, ü all sit below U+00FF
        assert_eq!(visual_length("café"), 4);
        assert_eq!(visual_length("año über"), 8);
    }

    #[test]
    fn test_visual_length_cjk() {
        assert_eq!(visual_length("你好"), 4);
        assert_eq!(visual_length("主打「轻快无边界」"), 18);
        assert_eq!(visual_length("ColorOS 7 在"), 12);
    }

    #[test]
    fn test_is_latin() {
        assert!(is_latin(""));
        assert!(is_latin("plain text, with punctuation!"));
        assert!(!is_latin("mixed 中文"));
        assert!(!is_latin("，"));
    }

    proptest! {
        #[test]
        fn zero_only_for_empty(s in "\\PC{0,40}") {
            prop_assert_eq!(visual_length(&s) == 0, s.is_empty());
        }

        #[test]
        fn latin_counts_chars(s in "[a-zA-Z0-9 .,!?<>/]{0,80}") {
            prop_assert_eq!(visual_length(&s), s.chars().count());
        }

        #[test]
        fn full_width_counts_double(s in "[\u{4e00}-\u{9fa5}\u{ff01}-\u{ff5e}]{0,40}") {
            prop_assert_eq!(visual_length(&s), 2 * s.chars().count());
        }
    }
}
