//! Codepoint/character conversions and codepoint length.

use alloc::string::String;

use crate::unicode;

/// Codepoint value of the first character of `s`, or 0 for the empty string.
pub fn ascii(s: &str) -> i32 {
    s.chars().next().map_or(0, |c| c as i32)
}

/// Returns a single-character string holding the codepoint `n mod 256`;
/// a negative `n` yields the empty string.
///
/// Values 0x80–0xFF encode as the two-byte UTF-8 sequence for U+0080–U+00FF.
pub fn chr(n: i64) -> String {
    if n < 0 {
        return String::new();
    }
    String::from(char::from((n & 0xFF) as u8))
}

/// Codepoint count of `s`.
pub fn length(s: &str) -> i32 {
    i32::try_from(unicode::char_count::<false>(s.as_bytes())).unwrap_or(i32::MAX)
}

/// ASCII fast path of [`length`]: the byte count is the codepoint count.
///
/// Caller contract: `s` is single-byte-only; checked in debug builds.
pub fn length_ascii(s: &str) -> i32 {
    debug_assert!(s.is_ascii());
    i32::try_from(unicode::char_count::<true>(s.as_bytes())).unwrap_or(i32::MAX)
}
