//! SHA-256 Kernel Constants
//!
//! Both tables come from FIPS 180-4 §4.2.2 and §5.3.3:
//!
//! ```text
//! K[i]  = floor(frac(cbrt(p_i)) * 2^32)   first 64 primes
//! H0[i] = floor(frac(sqrt(p_i)) * 2^32)   first 8 primes
//! ```

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Compression block size (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Digest size (in bytes).
pub const DIGEST_SIZE: usize = 32;

/// Number of 32-bit words in the chaining state.
pub const STATE_WORDS: usize = 8;

/// Trailing big-endian bit-length field of the final block (in bytes).
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Largest tail that still fits the marker byte and the length field in one block.
pub const MAX_SINGLE_TAIL: usize = BLOCK_SIZE - LENGTH_FIELD_SIZE - 1;

/// Padding marker appended right after the last data byte.
pub const PAD_MARKER: u8 = 0x80;

/// Number of compression rounds per block.
pub const ROUNDS: usize = 64;

// =============================================================================
// INITIAL HASH VALUE: frac(sqrt(p)) for the first 8 primes
// =============================================================================

/// Standard SHA-256 initial chaining value.
pub const H0: [u32; STATE_WORDS] = [
    0x6a09_e667, // sqrt(2)
    0xbb67_ae85, // sqrt(3)
    0x3c6e_f372, // sqrt(5)
    0xa54f_f53a, // sqrt(7)
    0x510e_527f, // sqrt(11)
    0x9b05_688c, // sqrt(13)
    0x1f83_d9ab, // sqrt(17)
    0x5be0_cd19, // sqrt(19)
];

// =============================================================================
// ROUND CONSTANTS: frac(cbrt(p)) for the first 64 primes
// =============================================================================

/// Round constant table, shared read-only by every kernel.
///
/// Kept as a `static` (not `const`) so the accelerated kernels can load
/// four consecutive words straight from memory.
#[rustfmt::skip]
pub static K256: [u32; ROUNDS] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5,
    0x3956_c25b, 0x59f1_11f1, 0x923f_82a4, 0xab1c_5ed5,
    0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3,
    0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174,
    0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc,
    0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7,
    0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967,
    0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13,
    0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85,
    0xa2bf_e8a1, 0xa81a_664b, 0xc24b_8b70, 0xc76c_51a3,
    0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5,
    0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208,
    0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

// =============================================================================
// CONFORMANCE VECTORS
// =============================================================================

/// Known-answer digest of the empty message.
pub const EMPTY_DIGEST: [u8; DIGEST_SIZE] = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
    0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
];

/// Known-answer digest of `"abc"`.
pub const ABC_DIGEST: [u8; DIGEST_SIZE] = [
    0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
    0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
];

/// FIPS 180-2 two-block message (448 bits).
pub const TWO_BLOCK_MESSAGE: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// Known-answer digest of [`TWO_BLOCK_MESSAGE`].
pub const TWO_BLOCK_DIGEST: [u8; DIGEST_SIZE] = [
    0x24, 0x8d, 0x6a, 0x61, 0xd2, 0x06, 0x38, 0xb8, 0xe5, 0xc0, 0x26, 0x93, 0x0c, 0x3e, 0x60, 0x39,
    0xa3, 0x3c, 0xe4, 0x59, 0x64, 0xff, 0x21, 0x67, 0xf6, 0xec, 0xed, 0xd4, 0x19, 0xdb, 0x06, 0xc1,
];
