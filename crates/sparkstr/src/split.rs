//! Delimiter-occurrence-counted splitting (`substring_index`).

use core::cmp;

use bstr::ByteSlice;

/// Returns the part of `input` before `count` occurrences of `delimiter`
/// when `count` is positive, or the part after `|count|` occurrences counted
/// from the right when negative. `count == 0` yields the empty string.
///
/// Matching is exact, case-sensitive byte comparison. When `input` holds
/// fewer than `|count|` occurrences the whole string is returned unchanged.
/// The result always borrows from `input`.
pub fn substring_index<'a>(input: &'a str, delimiter: &str, count: i32) -> &'a str {
    if count == 0 {
        return "";
    }
    let bytes = input.as_bytes();
    let delim = delimiter.as_bytes();
    if count > 0 {
        match forward_occurrence(bytes, delim, count.unsigned_abs()) {
            Some(at) => &input[..at],
            None => input,
        }
    } else {
        match backward_occurrence(bytes, delim, count.unsigned_abs()) {
            Some(at) => &input[at + delim.len()..],
            None => input,
        }
    }
}

/// Byte offset of the `count`-th occurrence of `delim`, scanning forward.
///
/// Each continued search is anchored one byte past the previous occurrence's
/// start, not its end, so a delimiter that overlaps itself counts overlapping
/// occurrences.
fn forward_occurrence(bytes: &[u8], delim: &[u8], count: u32) -> Option<usize> {
    let mut at = bytes.find(delim)?;
    for _ in 1..count {
        let from = at + 1;
        if from > bytes.len() {
            return None;
        }
        at = from + bytes[from..].find(delim)?;
    }
    Some(at)
}

/// Byte offset of the `count`-th occurrence of `delim`, scanning backward.
///
/// Each continued search admits only occurrences starting strictly left of
/// the previous match's start byte (the match itself may extend past it).
/// Running off the left edge means the string holds fewer occurrences than
/// requested.
fn backward_occurrence(bytes: &[u8], delim: &[u8], count: u32) -> Option<usize> {
    let mut at = rfind_from(bytes, delim, bytes.len().saturating_sub(1))?;
    for _ in 1..count {
        at = rfind_from(bytes, delim, at.checked_sub(1)?)?;
    }
    Some(at)
}

/// Last occurrence of `delim` whose start byte is at or before `pos`.
fn rfind_from(bytes: &[u8], delim: &[u8], pos: usize) -> Option<usize> {
    let window = cmp::min(pos.saturating_add(delim.len()), bytes.len());
    bytes[..window].rfind(delim)
}
