//! Bit-manipulation primitives of the SHA-256 round function (FIPS 180-4 §4.1.2).

use crate::kernels::constants::BLOCK_SIZE;

/// Choose: `x` selects between `y` and `z` bit by bit.
#[inline(always)]
pub const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Majority of three bits.
#[inline(always)]
pub const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0, applied to `a` in every round.
#[inline(always)]
pub const fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1, applied to `e` in every round.
#[inline(always)]
pub const fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// σ0, message schedule.
#[inline(always)]
pub const fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1, message schedule.
#[inline(always)]
pub const fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Load the 16 big-endian message words of one block.
#[inline(always)]
pub fn load_words(block: &[u8]) -> [u32; 16] {
    debug_assert_eq!(block.len(), BLOCK_SIZE);
    let mut w = [0u32; 16];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_and_majority_truth_tables() {
        assert_eq!(ch(0xFFFF_FFFF, 0x1234_5678, 0x9ABC_DEF0), 0x1234_5678);
        assert_eq!(ch(0, 0x1234_5678, 0x9ABC_DEF0), 0x9ABC_DEF0);
        assert_eq!(maj(0xFFFF_0000, 0xFF00_FF00, 0x0000_0000), 0xFF00_0000);
        assert_eq!(maj(0xF0F0_F0F0, 0xF0F0_F0F0, 0x0F0F_0F0F), 0xF0F0_F0F0);
    }

    #[test]
    fn test_sigma_single_bit() {
        // 1 rotated right by n lands on bit (32 - n); shifts drop it.
        assert_eq!(small_sigma0(1), (1 << 25) | (1 << 14));
        assert_eq!(small_sigma1(1), (1 << 15) | (1 << 13));
        assert_eq!(big_sigma0(1), (1 << 30) | (1 << 19) | (1 << 10));
        assert_eq!(big_sigma1(1), (1 << 26) | (1 << 21) | (1 << 7));
    }

    #[test]
    fn test_load_words_is_big_endian() {
        let mut block = [0u8; BLOCK_SIZE];
        block[..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
        block[63] = 0x18;
        let w = load_words(&block);
        assert_eq!(w[0], 0x6162_6380);
        assert_eq!(w[15], 0x18);
        assert!(w[1..15].iter().all(|&x| x == 0));
    }
}
