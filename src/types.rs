//! Core types for convolutional coding
//!
//! Shared aliases and the central error type used throughout the crate.
//!
//! ## Bit representation
//!
//! Bits travel as `u8` streams, one bit per byte. On the *input* side the
//! recognized symbol values are numeric `0`/`1` and ASCII `b'0'`/`b'1'`;
//! anything else is treated as unrecognized and handled per operation
//! (skipped or no-op, never an error). Emitted output bits are always
//! numeric `0`/`1`.

/// A single bit symbol (input domain: `0`, `1`, `b'0'`, `b'1'`; output: `0`/`1`).
pub type Bit = u8;

/// A stream of bits, one per byte.
pub type BitStream = Vec<Bit>;

/// A path metric. Semantics (likelihood, distance, ...) are defined by the
/// search algorithm driving the path list, not by this crate.
pub type Metric = f64;

/// Result type for coding operations.
pub type CodingResult<T> = Result<T, CodingError>;

/// Errors that can occur during coding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodingError {
    /// `pop_begin` was called on a path list with no entries. The search has
    /// exhausted all candidates; callers must propagate this, not paper over
    /// it with a sentinel path.
    #[error("path list is empty")]
    EmptyPathList,
}
