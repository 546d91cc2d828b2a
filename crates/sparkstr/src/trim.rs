//! Edge trimming: caller-supplied trim sets and the fixed ASCII-space form.
//!
//! The left scan hops forward a codepoint at a time; the right scan walks
//! backward byte by byte and only positions passing the first-byte test begin
//! a codepoint to test. Set membership is byte-sequence containment of the
//! candidate codepoint's encoding in the trim string — UTF-8's
//! self-synchronization guarantees that matches a whole member codepoint and
//! nothing else.

use crate::unicode;

/// Removes leading and trailing codepoints of `input` that appear in
/// `trim_chars`. An empty `trim_chars` returns `input` unchanged; the result
/// always borrows from `input`.
pub fn trim<'a>(trim_chars: &str, input: &'a str) -> &'a str {
    trim_set::<true, true>(trim_chars, input)
}

/// Removes leading codepoints of `input` that appear in `trim_chars`.
pub fn ltrim<'a>(trim_chars: &str, input: &'a str) -> &'a str {
    trim_set::<true, false>(trim_chars, input)
}

/// Removes trailing codepoints of `input` that appear in `trim_chars`.
pub fn rtrim<'a>(trim_chars: &str, input: &'a str) -> &'a str {
    trim_set::<false, true>(trim_chars, input)
}

/// ASCII fast path of [`trim`]: byte-wise membership, no decoding.
///
/// Caller contract: both `input` and `trim_chars` are single-byte-only;
/// checked in debug builds.
pub fn trim_ascii<'a>(trim_chars: &str, input: &'a str) -> &'a str {
    debug_assert!(input.is_ascii() && trim_chars.is_ascii());
    trim_set_ascii::<true, true>(trim_chars, input)
}

/// ASCII fast path of [`ltrim`].
pub fn ltrim_ascii<'a>(trim_chars: &str, input: &'a str) -> &'a str {
    debug_assert!(input.is_ascii() && trim_chars.is_ascii());
    trim_set_ascii::<true, false>(trim_chars, input)
}

/// ASCII fast path of [`rtrim`].
pub fn rtrim_ascii<'a>(trim_chars: &str, input: &'a str) -> &'a str {
    debug_assert!(input.is_ascii() && trim_chars.is_ascii());
    trim_set_ascii::<false, true>(trim_chars, input)
}

/// Removes leading and trailing 0x20 (space) bytes from `input`.
///
/// The space byte never occurs inside a multi-byte UTF-8 sequence, so the
/// byte compare is valid for any input, ASCII or not.
pub fn trim_space(input: &str) -> &str {
    trim_spaces::<true, true>(input)
}

/// Removes leading 0x20 (space) bytes from `input`.
pub fn ltrim_space(input: &str) -> &str {
    trim_spaces::<true, false>(input)
}

/// Removes trailing 0x20 (space) bytes from `input`.
pub fn rtrim_space(input: &str) -> &str {
    trim_spaces::<false, true>(input)
}

fn trim_set<'a, const LEFT: bool, const RIGHT: bool>(
    trim_chars: &str,
    input: &'a str,
) -> &'a str {
    if input.is_empty() || trim_chars.is_empty() {
        return input;
    }
    let bytes = input.as_bytes();

    let mut begin = 0usize;
    if LEFT {
        while begin < bytes.len() {
            let len = unicode::char_length(bytes[begin]);
            if !trim_chars.contains(&input[begin..begin + len]) {
                break;
            }
            begin += len;
        }
    }

    let mut end = bytes.len();
    if RIGHT {
        let mut cur = end;
        while cur > begin {
            cur -= 1;
            if unicode::is_char_start(bytes[cur]) {
                if !trim_chars.contains(&input[cur..end]) {
                    break;
                }
                end = cur;
            }
        }
    }

    &input[begin..end]
}

fn trim_set_ascii<'a, const LEFT: bool, const RIGHT: bool>(
    trim_chars: &str,
    input: &'a str,
) -> &'a str {
    if input.is_empty() || trim_chars.is_empty() {
        return input;
    }
    let set = trim_chars.as_bytes();
    let bytes = input.as_bytes();

    let mut begin = 0usize;
    let mut end = bytes.len();
    if LEFT {
        while begin < end && set.contains(&bytes[begin]) {
            begin += 1;
        }
    }
    if RIGHT {
        while end > begin && set.contains(&bytes[end - 1]) {
            end -= 1;
        }
    }

    &input[begin..end]
}

fn trim_spaces<const LEFT: bool, const RIGHT: bool>(input: &str) -> &str {
    let bytes = input.as_bytes();

    let mut begin = 0usize;
    let mut end = bytes.len();
    if LEFT {
        while begin < end && bytes[begin] == b' ' {
            begin += 1;
        }
    }
    if RIGHT {
        while end > begin && bytes[end - 1] == b' ' {
            end -= 1;
        }
    }

    &input[begin..end]
}
