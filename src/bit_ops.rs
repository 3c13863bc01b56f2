//! Bit Operations — length, packing, parity, take/skip extraction
//!
//! Small bit-level primitives shared by the convolutional coding blocks:
//! bit-length of a word, packing a symbol sequence into a `u64`, the XOR
//! reduction (parity) of a 64-bit word, and a take/skip sub-sequence
//! extractor for pulling periodic columns out of a multiplexed stream.
//!
//! All word arithmetic is on `u64`; values that would need more than 64 bits
//! are out of contract for every caller in this crate.
//!
//! ## Example
//!
//! ```rust
//! use convcode_core::bit_ops::{bit_length, pack_symbols, parity, take_skip};
//!
//! assert_eq!(bit_length(5), 3);
//! assert_eq!(pack_symbols(&[1, 0, 1]), 0b101);
//! assert_eq!(parity(0b1011), 1);
//! assert_eq!(take_skip(&[1u8, 2, 3, 4, 5, 6], 1, 1, 0), vec![1, 3, 5]);
//! ```

use crate::types::Bit;

/// Number of bits needed to represent `value`: `floor(log2(value)) + 1`,
/// and 0 for 0.
///
/// Counted by repeated right-shift rather than a hardware instruction, so
/// the behavior is explicit and portable.
pub fn bit_length(mut value: u64) -> u32 {
    let mut n = 0;
    while value != 0 {
        value >>= 1;
        n += 1;
    }
    n
}

/// Map an input symbol to a bit. `0` and `b'0'` are zero, `1` and `b'1'`
/// are one, everything else is unrecognized.
pub fn symbol_to_bit(symbol: u8) -> Option<Bit> {
    match symbol {
        0 | b'0' => Some(0),
        1 | b'1' => Some(1),
        _ => None,
    }
}

/// Pack a symbol sequence into a `u64`, first recognized symbol in the most
/// significant placed position.
///
/// Unrecognized symbols are skipped without shifting the accumulator. More
/// than 64 recognized symbols overflow silently (defined wraparound, not an
/// error).
pub fn pack_symbols(seq: &[u8]) -> u64 {
    let mut bits = 0u64;
    for &symbol in seq {
        match symbol_to_bit(symbol) {
            Some(1) => {
                bits <<= 1;
                bits ^= 1;
            }
            Some(_) => bits <<= 1,
            None => continue,
        }
    }
    bits
}

/// XOR of all 64 bits of `value` (the Hamming weight mod 2), computed by
/// successive halving folds.
pub fn parity(mut value: u64) -> Bit {
    value ^= value >> 32;
    value ^= value >> 16;
    value ^= value >> 8;
    value ^= value >> 4;
    value ^= value >> 2;
    value ^= value >> 1;
    (value & 1) as Bit
}

/// Starting at `offset`, repeatedly copy `take` consecutive elements and then
/// advance the cursor by `skip` more, until the cursor passes the end.
///
/// `take == 0 && skip == 0` is a degenerate request and returns an empty
/// vector immediately.
pub fn take_skip<T: Clone>(seq: &[T], take: usize, skip: usize, offset: usize) -> Vec<T> {
    let mut output = Vec::with_capacity(seq.len());

    if take == 0 && skip == 0 {
        return output;
    }

    let mut cursor = offset;
    while cursor < seq.len() {
        let end = usize::min(cursor + take, seq.len());
        output.extend_from_slice(&seq[cursor..end]);
        cursor = end + skip;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(3), 2);
        assert_eq!(bit_length(4), 3);
        assert_eq!(bit_length(7), 3);
        assert_eq!(bit_length(8), 4);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    #[test]
    fn test_bit_length_is_highest_set_bit_position() {
        for shift in 0u32..64 {
            let value = 1u64 << shift;
            assert_eq!(bit_length(value), shift + 1);
        }
    }

    #[test]
    fn test_symbol_recognition() {
        assert_eq!(symbol_to_bit(0), Some(0));
        assert_eq!(symbol_to_bit(1), Some(1));
        assert_eq!(symbol_to_bit(b'0'), Some(0));
        assert_eq!(symbol_to_bit(b'1'), Some(1));
        assert_eq!(symbol_to_bit(2), None);
        assert_eq!(symbol_to_bit(b'x'), None);
        assert_eq!(symbol_to_bit(255), None);
    }

    #[test]
    fn test_pack_symbols() {
        assert_eq!(pack_symbols(&[1, 0, 1]), 5);
        assert_eq!(pack_symbols(&[1, 1, 1]), 7);
        assert_eq!(pack_symbols(&[1, 0, 0, 1, 0, 1]), 37);
        assert_eq!(pack_symbols(&[]), 0);
    }

    #[test]
    fn test_pack_symbols_ascii() {
        assert_eq!(pack_symbols(b"101"), 5);
        assert_eq!(pack_symbols(b"1011"), 11);
        // Numeric and ASCII forms can be mixed
        assert_eq!(pack_symbols(&[b'1', 0, 1]), 5);
    }

    #[test]
    fn test_pack_symbols_skips_unrecognized() {
        // The 9 neither shifts nor sets anything
        assert_eq!(pack_symbols(&[1, 9, 0, 1]), pack_symbols(&[1, 0, 1]));
        assert_eq!(pack_symbols(&[7, 42, b'x']), 0);
    }

    #[test]
    fn test_pack_symbols_overflow_wraps() {
        // 65 one-symbols: the first one is shifted out of the word
        let symbols = vec![1u8; 65];
        assert_eq!(pack_symbols(&symbols), u64::MAX);
    }

    #[test]
    fn test_parity_matches_popcount() {
        for value in [
            0u64,
            1,
            0b1011,
            0b1111,
            37,
            0xDEAD_BEEF,
            u64::MAX,
            1 << 63,
            0x5555_5555_5555_5555,
        ] {
            assert_eq!(
                parity(value) as u32,
                value.count_ones() % 2,
                "parity mismatch for {:#x}",
                value
            );
        }
    }

    #[test]
    fn test_take_skip_alternating() {
        let seq = [b'a', b'b', b'c', b'd', b'e', b'f'];
        assert_eq!(take_skip(&seq, 1, 1, 0), vec![b'a', b'c', b'e']);
        assert_eq!(take_skip(&seq, 1, 1, 1), vec![b'b', b'd', b'f']);
    }

    #[test]
    fn test_take_skip_degenerate() {
        let seq = [1u8, 2, 3];
        assert!(take_skip(&seq, 0, 0, 0).is_empty());
        assert!(take_skip(&seq, 0, 0, 2).is_empty());
    }

    #[test]
    fn test_take_skip_multi_take() {
        let seq = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(take_skip(&seq, 2, 3, 0), vec![0, 1, 5, 6]);
        // take runs past the end: the tail is copied and iteration stops
        assert_eq!(take_skip(&seq, 4, 4, 8), vec![8, 9]);
    }

    #[test]
    fn test_take_skip_offset_past_end() {
        let seq = [1u8, 2, 3];
        assert!(take_skip(&seq, 1, 1, 3).is_empty());
        assert!(take_skip(&seq, 1, 1, 10).is_empty());
    }

    #[test]
    fn test_take_skip_take_only() {
        let seq = [1u8, 2, 3, 4];
        assert_eq!(take_skip(&seq, 2, 0, 0), vec![1, 2, 3, 4]);
    }
}
