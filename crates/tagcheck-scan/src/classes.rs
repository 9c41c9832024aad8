//! Character classes used by the comment and tag patterns.
//!
//! Word characters are letters, numbers (any `\p{N}`, so `²` counts) and `_`.
//! Combining marks are not word characters. Whitespace is Unicode
//! `White_Space` plus the information separators U+001C..U+001F.

/// Regex class for one word character.
pub(crate) const WORD: &str = r"\p{L}\p{N}_";

/// Regex class for one whitespace character.
pub(crate) const SPACE: &str = r"\s\x1C-\x1F";

pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
