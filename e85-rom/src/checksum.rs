//! Rotating XOR checksum over the BCD block

/// Initial accumulator value
const CHECKSUM_SEED: u16 = 0xFFFF;

/// Compute the ROM checksum.
///
/// For every little-endian 16-bit word: XOR it into the accumulator, then rotate the
/// accumulator left by one bit. Input must have an even length; a trailing odd byte is
/// not part of any word and is ignored.
pub fn checksum(data: &[u8]) -> u16 {
    data.chunks_exact(2)
        .map(|word| u16::from_le_bytes([word[0], word[1]]))
        .fold(CHECKSUM_SEED, |acc, word| (acc ^ word).rotate_left(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_blocks() {
        assert_eq!(checksum(&[0x12, 0x90, 0x78, 0x56, 0x34, 0x12]), 0x02E2);
        assert_eq!(checksum(&[0x05, 0x00, 0x00, 0x00, 0x00, 0x00]), 0xFFD7);
        assert_eq!(checksum(&[0x99; 6]), 0x6666);
    }

    #[test]
    fn test_zero_block_keeps_seed() {
        // 0xFFFF rotates onto itself
        assert_eq!(checksum(&[0; 6]), 0xFFFF);
        assert_eq!(checksum(&[]), 0xFFFF);
    }

    #[test]
    fn test_single_word_rotates_left() {
        // 0xFFFF ^ 0x0001 = 0xFFFE, rotl -> 0xFFFD (a right rotation would give 0x7FFF)
        assert_eq!(checksum(&[0x01, 0x00]), 0xFFFD);
        // 0xFFFF ^ 0x8000 = 0x7FFF, rotl -> 0xFFFE
        assert_eq!(checksum(&[0x00, 0x80]), 0xFFFE);
    }

    #[test]
    fn test_words_are_little_endian() {
        // Swapping the bytes of a word must change the result
        assert_ne!(checksum(&[0x34, 0x12]), checksum(&[0x12, 0x34]));
    }

    #[test]
    fn test_order_sensitive() {
        let forward = [0x34, 0x12, 0x78, 0x56];
        let reversed_words = [0x78, 0x56, 0x34, 0x12];
        assert_eq!(checksum(&forward), 0x1BDF);
        assert_eq!(checksum(&reversed_words), 0x8276);
        assert_ne!(checksum(&forward), checksum(&reversed_words));
    }

    #[test]
    fn test_deterministic() {
        let block = [0x12, 0x90, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(checksum(&block), checksum(&block));
    }

    #[test]
    fn test_trailing_odd_byte_ignored() {
        assert_eq!(checksum(&[0x01, 0x00, 0xAB]), checksum(&[0x01, 0x00]));
    }
}
