//! Public API Layer
//!
use crate::engine::{dispatcher, hasher, parallel};
use crate::kernels::constants::H0;
use crate::types::{Digest, InputTooLarge};
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the SHA-256 digest of `input` on the best available backend.
///
/// # Panics
/// Panics if `input.len() * 8` does not fit in 64 bits. No slice that fits
/// in memory on a current platform reaches that; use [`try_hash`] to handle
/// it as an error.
///
/// # Example
/// ```rust
/// let digest = sha256_engine::hash(b"abc");
/// assert_eq!(digest[0], 0xba);
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> Digest {
    try_hash(input).unwrap_or_else(|e| panic!("{}", e))
}

/// Compute the SHA-256 digest of `input`, reporting oversize input as an error.
///
/// # Errors
/// Returns `InputTooLarge` if `input.len() * 8` does not fit in 64 bits.
#[inline]
pub fn try_hash(input: &[u8]) -> Result<Digest, InputTooLarge> {
    let compress = dispatcher::compressor_for(dispatcher::best_backend());
    let mut state = H0;
    hasher::run(compress, &mut state, input)
}

/// Compute the digest of `input` as 64 lowercase hex characters.
///
/// # Example
/// ```rust
/// assert_eq!(
///     sha256_engine::hash_hex(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn hash_hex(input: &[u8]) -> String {
    to_hex(&hash(input))
}

/// Render a digest as 64 lowercase hex characters.
#[cfg(feature = "std")]
#[must_use]
pub fn to_hex(digest: &Digest) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        // Writing into a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}

// =============================================================================
// BATCH HASHING
// =============================================================================

/// Digest many independent buffers; output order matches input order.
///
/// Runs in parallel with the `multithread` feature.
///
/// # Example
/// ```rust
/// let digests = sha256_engine::hash_many(&[b"a".as_slice(), b"b".as_slice()]);
/// assert_eq!(digests[1], sha256_engine::hash(b"b"));
/// ```
///
/// # Panics
/// Panics under the same condition as [`hash`].
#[must_use]
pub fn hash_many(inputs: &[&[u8]]) -> Vec<Digest> {
    let compress = dispatcher::compressor_for(dispatcher::best_backend());
    parallel::digest_all(inputs, compress).unwrap_or_else(|e| panic!("{}", e))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time (timing attack resistant).
///
/// # Example
/// ```rust
/// let data = b"Secure Data";
/// let digest = sha256_engine::hash(data);
/// assert!(sha256_engine::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &Digest) -> bool {
    try_hash(input).is_ok_and(|computed| computed.ct_eq(expected).into())
}
