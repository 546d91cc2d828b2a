//! Digest kernels: bytes in, fixed-length lowercase hex out.
//!
//! Hashing is delegated wholesale to the RustCrypto crates; this module only
//! fixes the dialect's output encoding (radix-16) and the `sha2` bit-length
//! dispatch.

use alloc::string::String;

use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// MD5 digest of `input` as a 32-character lowercase hex string.
pub fn md5_hex(input: &[u8]) -> String {
    hex::encode(Md5::digest(input))
}

/// SHA-1 digest of `input` as a 40-character lowercase hex string.
pub fn sha1_hex(input: &[u8]) -> String {
    hex::encode(Sha1::digest(input))
}

/// SHA-2 family digest of `input` as a lowercase hex string.
///
/// `bit_length` selects SHA-224/256/384/512; 0 is an alias for 256. Any
/// other value returns `None`, which the calling engine surfaces as SQL NULL.
pub fn sha2_hex(input: &[u8], bit_length: i32) -> Option<String> {
    match bit_length {
        0 | 256 => Some(hex::encode(Sha256::digest(input))),
        224 => Some(hex::encode(Sha224::digest(input))),
        384 => Some(hex::encode(Sha384::digest(input))),
        512 => Some(hex::encode(Sha512::digest(input))),
        _ => None,
    }
}
