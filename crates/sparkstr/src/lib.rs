//! Scalar string kernels with Spark SQL semantics: 1-based indexing,
//! negative-offset wraparound, multi-character trim sets, and
//! delimiter-counted splitting, over caller-validated UTF-8.
//!
//! Every kernel is a pure function that borrows its result from the input
//! wherever the dialect permits; only [`chr`] and the digest functions
//! allocate. Kernels with an ASCII-optimizable shape come in pairs: the
//! general entry point decodes UTF-8 boundaries, and its `*_ascii` twin may
//! be called by engines that have already proven a batch single-byte-only.
//!
//! ```
//! use sparkstr::{substr, substring_index, trim};
//!
//! assert_eq!(substr("Hello world", -5, None), "world");
//! assert_eq!(trim("xy", "xyabcyx"), "abc");
//! assert_eq!(substring_index("www.apache.org", ".", 2), "www.apache");
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chars;
mod search;
mod split;
mod substr;
mod trim;
mod unicode;

#[cfg(feature = "digest")]
mod digest;

#[cfg(test)]
mod tests;

pub use chars::{ascii, chr, length, length_ascii};
#[cfg(feature = "digest")]
pub use digest::{md5_hex, sha1_hex, sha2_hex};
pub use search::{contains, ends_with, instr, instr_ascii, starts_with};
pub use split::substring_index;
pub use substr::{substr, substr_ascii};
pub use trim::{
    ltrim, ltrim_ascii, ltrim_space, rtrim, rtrim_ascii, rtrim_space, trim, trim_ascii, trim_space,
};
