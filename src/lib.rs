//! # Convolutional Coding Core Library
//!
//! This crate provides the primitives for binary convolutional channel
//! coding: bit-level utilities, a configurable shift-register encoder with
//! annihilator (dual/check) polynomial derivation, and a metric-ordered path
//! container for building path-search decoders.
//!
//! ## Overview
//!
//! A convolutional code maps each input bit to K output bits, one per
//! generator polynomial, by taking parities over a sliding window of input
//! history. This library implements:
//!
//! - **Bit Operations**: bit length, symbol packing, 64-bit parity,
//!   take/skip column extraction
//! - **Encoding**: per-bit and batch feeds through a shift-register encoder
//! - **Annihilator Derivation**: the check polynomial whose convolution
//!   against a valid codeword zeroes out every Kth symbol
//! - **Path Management**: the sorted candidate list at the heart of
//!   sequential (stack) decoders
//!
//! The search algorithm that would drive the path list — Viterbi, Fano,
//! stack decoding — is an external collaborator, as are bit sources and
//! sinks. Everything here is pure, synchronous, in-memory computation.
//!
//! ## Signal Flow
//!
//! ```text
//! TX:    bits → ConvolutionalEncoder(G₁..G_K) → coded stream
//! Check: coded stream → ConvolutionalEncoder(annihilator) → take_skip → 0s
//! RX:    (external search) ⇄ PathList of candidate paths
//! ```
//!
//! ## Example
//!
//! ```rust
//! use convcode_core::bit_ops::take_skip;
//! use convcode_core::{CodeConfig, ConvolutionalEncoder};
//!
//! // Rate 1/2 code with generators 100101 and 1011
//! let mut encoder = ConvolutionalEncoder::from_config(&CodeConfig::k6_rate_half());
//!
//! let info = [1u8, 0, 1, 1, 0, 0, 1, 0];
//! let mut coded = Vec::new();
//! encoder.feed_all(&mut coded, &info);
//!
//! // The annihilator confirms the codeword: every 2nd symbol cancels to 0
//! let mut check = ConvolutionalEncoder::new(&[encoder.annihilator()]);
//! let mut annihilated = Vec::new();
//! check.feed_all(&mut annihilated, &coded);
//! assert!(take_skip(&annihilated, 1, 1, 1).iter().all(|&b| b == 0));
//! ```

pub mod bit_ops;
pub mod code_config;
pub mod convolutional_encoder;
pub mod path_list;
pub mod types;

pub use code_config::CodeConfig;
pub use convolutional_encoder::ConvolutionalEncoder;
pub use path_list::{HardDecisionPathList, Path, PathList};
pub use types::{Bit, BitStream, CodingError, CodingResult, Metric};
