//! Substring extraction with Spark's window rules.
//!
//! The argument handling is ordered carefully: a negative start is remapped
//! relative to the end of the string *before* the window's last position is
//! computed, so the clamp against the string length sees the absolute
//! codepoint position. Reordering those steps changes the observable result
//! for windows that begin before position 1.

use crate::unicode;

/// Returns the substring of `input` beginning at the 1-based codepoint
/// position `start`, covering `length` codepoints (or the rest of the string
/// when `length` is `None`).
///
/// Positions start at 1 and position 0 refers to the first codepoint. A
/// negative `start` counts from the end of the string, so `-1` is the last
/// codepoint. Windows that fall outside the string degrade to the empty
/// string; the result always borrows from `input`.
pub fn substr(input: &str, start: i32, length: Option<i32>) -> &str {
    extract::<false>(input, start, length.unwrap_or(i32::MAX))
}

/// ASCII fast path of [`substr`].
///
/// Caller contract: every codepoint of `input` is single-byte. Engines must
/// route here only when their precomputed all-ASCII property holds; the
/// contract is checked in debug builds only, and a violation in release
/// builds yields an unspecified (but memory-safe) result.
pub fn substr_ascii(input: &str, start: i32, length: Option<i32>) -> &str {
    debug_assert!(input.is_ascii());
    extract::<true>(input, start, length.unwrap_or(i32::MAX))
}

fn extract<const ASCII: bool>(input: &str, mut start: i32, mut length: i32) -> &str {
    if length <= 0 {
        return "";
    }
    // Spark reads position 0 as position 1.
    if start == 0 {
        start = 1;
    }

    let bytes = input.as_bytes();
    let num_chars = i32::try_from(unicode::char_count::<ASCII>(bytes)).unwrap_or(i32::MAX);

    // A negative start counts from the end of the string.
    if start < 0 {
        start = num_chars + start + 1;
    }

    // The window's last position is bounded by the string's absolute length,
    // and computing it must not wrap for extreme arguments.
    let last = match start.checked_add(length - 1) {
        Some(last) if last <= num_chars => last,
        _ => num_chars,
    };

    if start <= 0 {
        start = 1;
    }

    length = last - start + 1;
    if length <= 0 {
        return "";
    }

    let range = unicode::byte_range::<ASCII>(bytes, start as usize, length as usize);
    &input[range]
}
