//! Fullwidth/halfwidth conversion
//!
//! ASCII letters and digits map to the Unicode Fullwidth Forms block at a
//! fixed offset of 0xFEE0. Conversion walks the input one scalar value at
//! a time; characters outside the mapped ranges pass through unchanged.

use serde::{Deserialize, Serialize};

/// Width conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// ASCII alphanumerics to their fullwidth forms
    ToFullWidth,
    /// Fullwidth alphanumerics back to ASCII
    ToHalfWidth,
}

/// Convert `text` in the given direction.
///
/// The two directions are inverses on their respective domains:
/// converting `A-Za-z0-9` to fullwidth and back yields the original
/// string.
///
/// # Example
/// ```
/// use mojikit::text::convert::{Direction, convert_width};
///
/// assert_eq!(convert_width("ABC123", Direction::ToFullWidth), "ＡＢＣ１２３");
/// assert_eq!(convert_width("ａｂｃ", Direction::ToHalfWidth), "abc");
/// ```
pub fn convert_width(text: &str, direction: Direction) -> String {
    match direction {
        Direction::ToFullWidth => to_fullwidth(text),
        Direction::ToHalfWidth => to_halfwidth(text),
    }
}

/// Replace every ASCII letter and digit with its fullwidth counterpart.
///
/// Spaces and punctuation are left alone, matching what users expect
/// when widening alphanumerics embedded in Japanese text.
pub fn to_fullwidth(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                shift(c, |cp| cp + crate::FULLWIDTH_OFFSET)
            } else {
                c
            }
        })
        .collect()
}

/// Replace every fullwidth letter and digit with its ASCII counterpart.
pub fn to_halfwidth(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_fullwidth_alphanumeric(c) {
                shift(c, |cp| cp - crate::FULLWIDTH_OFFSET)
            } else {
                c
            }
        })
        .collect()
}

/// Fullwidth `Ａ-Ｚ`, `ａ-ｚ` and `０-９`
fn is_fullwidth_alphanumeric(c: char) -> bool {
    matches!(c, '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' | '\u{FF10}'..='\u{FF19}')
}

/// Apply a code point shift. Both mapped ranges stay inside the BMP, so
/// the result is always a valid scalar value; the fallback keeps the
/// function total anyway.
fn shift(c: char, f: impl Fn(u32) -> u32) -> char {
    char::from_u32(f(c as u32)).unwrap_or(c)
}
