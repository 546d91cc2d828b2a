//! Bytewise containment predicates and 1-based occurrence position.
//!
//! The predicates never decode: UTF-8 guarantees one codepoint's encoding is
//! never a byte-level alias of another at a different boundary, so byte
//! equality is codepoint equality.

use bstr::ByteSlice;

use crate::unicode;

/// True iff `pattern`'s bytes occur as a contiguous subsequence of `s`'s
/// bytes. The empty pattern is contained in every string.
pub fn contains(s: &str, pattern: &str) -> bool {
    s.as_bytes().find(pattern.as_bytes()).is_some()
}

/// True iff `s` is at least as long as `pattern` and begins with its bytes.
pub fn starts_with(s: &str, pattern: &str) -> bool {
    s.as_bytes().starts_with(pattern.as_bytes())
}

/// True iff `s` is at least as long as `pattern` and ends with its bytes.
pub fn ends_with(s: &str, pattern: &str) -> bool {
    s.as_bytes().ends_with(pattern.as_bytes())
}

/// 1-based codepoint position of the first occurrence of `needle` in `s`,
/// or 0 when `s` does not contain it. The empty needle matches at position 1.
pub fn instr(s: &str, needle: &str) -> i32 {
    match s.as_bytes().find(needle.as_bytes()) {
        Some(at) => to_position(unicode::char_count::<false>(&s.as_bytes()[..at])),
        None => 0,
    }
}

/// ASCII fast path of [`instr`]: the byte offset is the codepoint offset.
///
/// Caller contract: `s` is single-byte-only; checked in debug builds.
pub fn instr_ascii(s: &str, needle: &str) -> i32 {
    debug_assert!(s.is_ascii());
    match s.as_bytes().find(needle.as_bytes()) {
        Some(at) => to_position(at),
        None => 0,
    }
}

fn to_position(chars_before: usize) -> i32 {
    i32::try_from(chars_before + 1).unwrap_or(i32::MAX)
}
