use rstest::rstest;

use crate::substring_index;

#[rstest]
#[case("a.b.c", ".", 2, "a.b")]
#[case("a.b.c", ".", -2, "b.c")]
#[case("a.b.c", ".", 5, "a.b.c")]
#[case("a.b.c", ".", -5, "a.b.c")]
#[case("a.b.c", ".", 0, "")]
#[case("a.b.c", ".", 1, "a")]
#[case("a.b.c", ".", -1, "c")]
#[case("www.apache.org", ".", 1, "www")]
#[case("www.apache.org", ".", 2, "www.apache")]
#[case("www.apache.org", ".", -1, "org")]
#[case("abc", ".", 1, "abc")]
#[case("abc", ".", -1, "abc")]
#[case("ab", "ab", 1, "")]
#[case("ab", "ab", -1, "")]
#[case("", ".", 1, "")]
#[case("", ".", -1, "")]
#[case("", ".", 0, "")]
fn counted_prefixes_and_suffixes(
    #[case] input: &str,
    #[case] delim: &str,
    #[case] count: i32,
    #[case] expected: &str,
) {
    assert_eq!(substring_index(input, delim, count), expected);
}

/// A self-overlapping delimiter counts overlapping occurrences: the forward
/// scan re-anchors one byte past the previous match's start.
#[rstest]
#[case("aaaa", "aa", 1, "")]
#[case("aaaa", "aa", 2, "a")]
#[case("aaaa", "aa", 3, "aa")]
#[case("aaaa", "aa", 4, "aaaa")]
#[case("aaaa", "aa", -2, "a")]
#[case("aaaa", "aa", -3, "aa")]
fn overlapping_delimiters(
    #[case] input: &str,
    #[case] delim: &str,
    #[case] count: i32,
    #[case] expected: &str,
) {
    assert_eq!(substring_index(input, delim, count), expected);
}

/// The backward scan stops at the left edge: a match at offset 0 with more
/// occurrences still owed means the count is not satisfied.
#[rstest]
#[case("ab", "a", -2, "ab")]
#[case("a.b", ".", -2, "a.b")]
#[case(".ab", ".", -2, ".ab")]
fn backward_scan_exhausts_at_left_edge(
    #[case] input: &str,
    #[case] delim: &str,
    #[case] count: i32,
    #[case] expected: &str,
) {
    assert_eq!(substring_index(input, delim, count), expected);
}

/// The empty delimiter matches at every search anchor.
#[rstest]
#[case("abc", "", 1, "")]
#[case("abc", "", 2, "a")]
#[case("abc", "", -1, "c")]
#[case("abc", "", 5, "abc")]
#[case("abc", "", -5, "abc")]
#[case("", "", 1, "")]
#[case("", "", -1, "")]
fn empty_delimiter(
    #[case] input: &str,
    #[case] delim: &str,
    #[case] count: i32,
    #[case] expected: &str,
) {
    assert_eq!(substring_index(input, delim, count), expected);
}

#[rstest]
#[case("α,β,γ", ",", 2, "α,β")]
#[case("α,β,γ", ",", -2, "β,γ")]
#[case("a💡b💡c", "💡", -1, "c")]
#[case("a💡b💡c", "💡", 1, "a")]
#[case("日本語", "本", 1, "日")]
#[case("日本語", "本", -1, "語")]
fn multibyte_delimiters_match_bytewise(
    #[case] input: &str,
    #[case] delim: &str,
    #[case] count: i32,
    #[case] expected: &str,
) {
    assert_eq!(substring_index(input, delim, count), expected);
}
