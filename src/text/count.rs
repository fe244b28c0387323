//! Character counting
//!
//! Counts Unicode scalar values, which matches what a user perceives as
//! the character count for the supported scripts.

use serde::{Deserialize, Serialize};

/// Character counts for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCounts {
    /// Total number of characters
    pub total: usize,
    /// Total minus whitespace characters
    pub without_whitespace: usize,
    /// Total minus line-break characters
    pub without_line_breaks: usize,
}

/// Count the characters in `text`.
///
/// Whitespace is the Unicode whitespace class (space, tab, line breaks,
/// ideographic space and friends). Line breaks are `\n` and `\r`, so a
/// Windows `\r\n` pair is excluded as two characters.
///
/// # Example
/// ```
/// use mojikit::text::count::count_characters;
///
/// let counts = count_characters("a b\nc");
/// assert_eq!(counts.total, 5);
/// assert_eq!(counts.without_whitespace, 3);
/// assert_eq!(counts.without_line_breaks, 4);
/// ```
pub fn count_characters(text: &str) -> CharacterCounts {
    let mut total = 0;
    let mut whitespace = 0;
    let mut line_breaks = 0;

    for c in text.chars() {
        total += 1;
        if c.is_whitespace() {
            whitespace += 1;
        }
        if c == '\n' || c == '\r' {
            line_breaks += 1;
        }
    }

    CharacterCounts {
        total,
        without_whitespace: total - whitespace,
        without_line_breaks: total - line_breaks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        let counts = count_characters("");
        assert_eq!(counts.total, 0);
        assert_eq!(counts.without_whitespace, 0);
        assert_eq!(counts.without_line_breaks, 0);
    }

    #[test]
    fn test_mixed_text() {
        let counts = count_characters("a b\nc");
        assert_eq!(counts.total, 5);
        assert_eq!(counts.without_whitespace, 3);
        assert_eq!(counts.without_line_breaks, 4);
    }

    #[test]
    fn test_no_whitespace() {
        let counts = count_characters("hello");
        assert_eq!(counts.total, 5);
        assert_eq!(counts.without_whitespace, 5);
        assert_eq!(counts.without_line_breaks, 5);
    }

    #[test]
    fn test_tabs_and_carriage_returns() {
        let counts = count_characters("a\tb\r\nc");
        assert_eq!(counts.total, 6);
        assert_eq!(counts.without_whitespace, 3);
        // \r and \n both count as line breaks
        assert_eq!(counts.without_line_breaks, 4);
    }

    #[test]
    fn test_multibyte_characters() {
        // Counts scalar values, not bytes
        let counts = count_characters("日本語");
        assert_eq!(counts.total, 3);
        assert_eq!(counts.without_whitespace, 3);
    }

    #[test]
    fn test_ideographic_space_is_whitespace() {
        let counts = count_characters("あ\u{3000}い");
        assert_eq!(counts.total, 3);
        assert_eq!(counts.without_whitespace, 2);
        assert_eq!(counts.without_line_breaks, 3);
    }

    #[test]
    fn test_only_line_breaks() {
        let counts = count_characters("\n\n\n");
        assert_eq!(counts.total, 3);
        assert_eq!(counts.without_whitespace, 0);
        assert_eq!(counts.without_line_breaks, 0);
    }

    #[test]
    fn test_whitespace_identity() {
        let text = "one two\tthree\nfour";
        let counts = count_characters(text);
        let whitespace = text.chars().filter(|c| c.is_whitespace()).count();
        assert_eq!(counts.total, counts.without_whitespace + whitespace);
    }
}
