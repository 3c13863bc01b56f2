//! Convolutional Encoder — shift-register encoding and annihilator polynomials
//!
//! A rate-1/K convolutional encoder driven one input bit at a time. The
//! encoder owns an ordered set of generator masks and a single `u64` shift
//! register holding the input history: each fed bit is shifted in at bit 0,
//! and every generator emits the parity of `memory & generator`.
//!
//! The register is deliberately *not* masked to the constraint length. Each
//! generator only ever reads its own low-order bits through the AND, so
//! history beyond the widest generator is simply never observed. The trade
//! is a hard precondition: generators and any seeded memory must fit in 64
//! bits, and per-bit correctness is undefined beyond that width.
//!
//! The encoder can also derive the *annihilator* polynomial of its generator
//! set: a 1-in/1-out convolution which, applied to a codeword of the original
//! code at the right phase, produces a zero output every Kth symbol. This is
//! the check relationship used to verify generator/codeword consistency.
//!
//! ## Example
//!
//! ```rust
//! use convcode_core::bit_ops::take_skip;
//! use convcode_core::convolutional_encoder::ConvolutionalEncoder;
//!
//! // Generators 100101 and 1011 (decimal 37 and 11)
//! let mut encoder = ConvolutionalEncoder::new(&[37, 11]);
//! assert_eq!(encoder.annihilator(), 1179);
//!
//! let mut coded = Vec::new();
//! encoder.feed_all(&mut coded, &[1, 1, 0, 1, 0, 0, 1, 0]);
//! assert_eq!(coded.len(), 8 * 2);
//!
//! // Run the codeword through the annihilator: every 2nd output is zero
//! let mut check = ConvolutionalEncoder::new(&[encoder.annihilator()]);
//! let mut annihilated = Vec::new();
//! check.feed_all(&mut annihilated, &coded);
//! assert!(take_skip(&annihilated, 1, 1, 1).iter().all(|&b| b == 0));
//! ```

use crate::bit_ops::{bit_length, pack_symbols, parity, symbol_to_bit};
use crate::code_config::CodeConfig;
use crate::types::{Bit, BitStream};

/// Shift-register convolutional encoder.
///
/// An encoder with no generators is a valid degenerate state: feeding bits
/// still updates the register, but every step emits an empty output and the
/// annihilator is 0.
#[derive(Debug, Clone)]
pub struct ConvolutionalEncoder {
    generators: Vec<u64>,
    memory: u64,
}

impl Default for ConvolutionalEncoder {
    /// A memory-less pass-through code: single generator `1`, empty register.
    fn default() -> Self {
        Self::new(&[1])
    }
}

impl ConvolutionalEncoder {
    /// Create an encoder from generator bit masks with an all-zero register.
    /// Zero masks are dropped, order is preserved.
    pub fn new(generators: &[u64]) -> Self {
        let mut encoder = Self {
            generators: Vec::new(),
            memory: 0,
        };
        encoder.set_generators(generators);
        encoder
    }

    /// Create an encoder from a [`CodeConfig`].
    pub fn from_config(config: &CodeConfig) -> Self {
        Self::new(config.generators())
    }

    /// Replace the generator set. Bit 0 of each mask is the direct tap, bit
    /// *i* taps the input *i* steps back. Zero entries are dropped; the order
    /// of the remaining entries is preserved.
    ///
    /// Example: `[0b101, 0b111]` is the textbook (5, 7) rate-1/2 code.
    pub fn set_generators(&mut self, generators: &[u64]) {
        self.generators.clear();
        self.generators
            .extend(generators.iter().copied().filter(|&g| g != 0));

        let dropped = generators.len() - self.generators.len();
        if dropped > 0 {
            tracing::debug!("dropped {} zero generator mask(s)", dropped);
        }
    }

    /// Replace the generator set from rows of bit symbols, first symbol in
    /// each row being the most significant tap. Each row is packed with
    /// [`pack_symbols`] and then follows the mask rules of
    /// [`set_generators`](Self::set_generators).
    pub fn set_generators_from_symbols(&mut self, rows: &[&[u8]]) {
        let masks: Vec<u64> = rows.iter().map(|row| pack_symbols(row)).collect();
        self.set_generators(&masks);
    }

    /// Set the shift-register content directly. Normal operation starts from
    /// 0; this is mainly for re-seeding and tests.
    pub fn set_memory(&mut self, value: u64) {
        self.memory = value;
    }

    /// Set the shift-register content from a bit-symbol sequence
    /// (first symbol = most significant bit).
    pub fn set_memory_from_symbols(&mut self, symbols: &[u8]) {
        self.set_memory(pack_symbols(symbols));
    }

    /// The active generator masks.
    pub fn generators(&self) -> &[u64] {
        &self.generators
    }

    /// Current shift-register content.
    pub fn memory(&self) -> u64 {
        self.memory
    }

    /// Clear the shift register.
    pub fn reset(&mut self) {
        self.memory = 0;
    }

    /// Rate numerator N: output streams carry one bit per generator per input
    /// bit, so this is always 1 before puncturing.
    pub fn rate_numerator(&self) -> usize {
        1
    }

    /// Rate denominator K: the number of active generators, i.e. coded bits
    /// emitted per input bit.
    pub fn rate_denominator(&self) -> usize {
        self.generators.len()
    }

    /// Deepest tap over all generators, in input steps. 0 with no
    /// generators (zero masks are never stored, so the per-generator
    /// `bit_length - 1` cannot underflow).
    pub fn memory_depth(&self) -> u32 {
        self.generators
            .iter()
            .map(|&g| bit_length(g) - 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of input bits (including the current one) that influence any
    /// output bit: memory depth + 1.
    pub fn constraint_length(&self) -> u32 {
        self.memory_depth() + 1
    }

    /// Derive the annihilator polynomial of the current generator set, or 0
    /// if the set is empty.
    ///
    /// The generators' bit columns are woven into a single word: positions
    /// run from the most significant bit of the widest generator down to bit
    /// 0, and within each position the generators are read last to first;
    /// each read bit is shifted into the result from the low end, so the
    /// first woven bit lands highest. For generators `{100101, 1011}` the
    /// columns weave to `010010011011` = 1179.
    ///
    /// Applied as a single-generator code to a codeword of the original set,
    /// the annihilator yields a zero output every Kth symbol at the matching
    /// phase offset.
    pub fn annihilator(&self) -> u64 {
        if self.generators.is_empty() {
            return 0;
        }

        let mut annihilator = 0u64;
        for position in (0..self.constraint_length()).rev() {
            for &generator in self.generators.iter().rev() {
                annihilator <<= 1;
                annihilator ^= (generator >> position) & 1;
            }
        }
        annihilator
    }

    /// Push one input symbol through the encoder and return the coded bits,
    /// one per generator in configured order.
    ///
    /// An unrecognized symbol is a no-op: the register is left untouched and
    /// the returned stream is empty. This differs from the batch form
    /// [`feed_all`](Self::feed_all), which skips unrecognized positions but
    /// keeps going.
    pub fn feed(&mut self, symbol: u8) -> BitStream {
        let bit = match symbol_to_bit(symbol) {
            Some(bit) => bit,
            None => return BitStream::new(),
        };

        self.memory <<= 1;
        self.memory ^= bit as u64;

        let mut output = Vec::with_capacity(self.generators.len());
        for &generator in &self.generators {
            output.push(parity(self.memory & generator));
        }
        output
    }

    /// Push one input symbol through the encoder, appending the coded bits
    /// to `output`.
    pub fn feed_into(&mut self, output: &mut BitStream, symbol: u8) {
        let coded = self.feed(symbol);
        output.extend_from_slice(&coded);
    }

    /// Push a symbol sequence through the encoder, appending all coded bits
    /// to `output` in input order.
    ///
    /// Unrecognized symbols are skipped silently and the remaining symbols
    /// are still processed — the batch counterpart of the single-bit no-op.
    pub fn feed_all(&mut self, output: &mut BitStream, symbols: &[u8]) {
        output.reserve(symbols.len() * self.generators.len());

        for &symbol in symbols {
            let bit = match symbol_to_bit(symbol) {
                Some(bit) => bit,
                None => continue,
            };

            self.memory <<= 1;
            self.memory ^= bit as u64;

            for &generator in &self.generators {
                output.push(parity(self.memory & generator));
            }
        }
    }
}
