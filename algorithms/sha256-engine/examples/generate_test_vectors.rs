//! Generator for SHA-256 test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Digests come from the `sha2` reference crate, never from this engine.
//! Placeholder inputs (upper-case names) are expanded by the test loader.
#![allow(clippy::unwrap_used)]
use serde_json::json;
use sha2::Digest as _;

fn reference_hex(input: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(input))
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. FIPS 180-2 EXAMPLES
    // =========================================================================

    let literal = [
        ("empty", ""),
        ("abc", "abc"),
        (
            "nist_two_block",
            "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        ),
        (
            "nist_896_bit",
            "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        ),
        ("quick_brown_fox", "The quick brown fox jumps over the lazy dog"),
    ];
    for (name, input) in literal {
        vectors.push(json!({
            "name": name,
            "input": input,
            "hash": reference_hex(input.as_bytes())
        }));
    }

    // One million 'a' - the long-message example
    vectors.push(json!({
        "name": "million_a",
        "input": "MILLION_A",
        "hash": reference_hex(&vec![b'a'; 1_000_000])
    }));

    // =========================================================================
    // 2. PADDING BOUNDARIES
    // =========================================================================

    let boundaries: [(&str, &str, u8, usize); 5] = [
        // Exact block: the whole tail is a padding-only block
        ("exact_64_zero", "EXACT_64_ZERO", 0x00, 64),
        // Largest remainder that still fits marker + length in one block
        ("unaligned_55_one", "UNALIGNED_55_ONE", 0x01, 55),
        // Smallest remainder that spills into a second tail block
        ("unaligned_56_one", "UNALIGNED_56_ONE", 0x01, 56),
        ("unaligned_63_two", "UNALIGNED_63_TWO", 0x02, 63),
        ("large_1kb", "LARGE_1KB", b'A', 1024),
    ];
    for (name, placeholder, byte, len) in boundaries {
        vectors.push(json!({
            "name": name,
            "input": placeholder,
            "hash": reference_hex(&vec![byte; len])
        }));
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
