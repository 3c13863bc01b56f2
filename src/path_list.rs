//! Path List — metric-ordered candidate paths for sequential decoding
//!
//! A [`PathList`] holds the candidate paths of a path-search decoder (stack
//! or Fano style sequential decoding), kept invariantly sorted by metric,
//! best first. Each [`Path`] pairs a cumulative metric with the output
//! produced so far and a snapshot of the encoder state that produced it.
//!
//! The search algorithm itself is not part of this crate. A driver extends
//! the best path (`pop_begin`), scores the successors with its own branch
//! metric, re-inserts them (`add_path`), and prunes hopeless candidates with
//! the two `remove_paths_*` operations. Paths are values: a stored path is
//! never mutated, successors are built copy-then-extend.
//!
//! ## Example
//!
//! ```rust
//! use convcode_core::convolutional_encoder::ConvolutionalEncoder;
//! use convcode_core::path_list::{Path, PathList};
//! use convcode_core::types::Bit;
//!
//! let seed = ConvolutionalEncoder::new(&[5, 7]);
//! let mut list: PathList<ConvolutionalEncoder, Bit> = PathList::new(&seed);
//!
//! // Extend the seed path by one decoded bit (branch metric -0.5)
//! let path = list.pop_begin().unwrap();
//! let mut successor = path.clone();
//! successor.encoder.feed(1);
//! successor.output.push(1);
//! successor.metric -= 0.5;
//! list.add_path(path);
//! list.add_path(successor);
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.pop_begin().unwrap().metric, 0.0);
//! ```

use std::collections::VecDeque;

use crate::convolutional_encoder::ConvolutionalEncoder;
use crate::types::{Bit, CodingError, CodingResult, Metric};

/// One candidate decode trajectory: cumulative metric, produced output, and
/// the encoder state that produced it.
#[derive(Debug, Clone)]
pub struct Path<E, T> {
    /// Cumulative path metric; ranking only, semantics belong to the search.
    pub metric: Metric,
    /// Output symbols produced along this path, append-only.
    pub output: Vec<T>,
    /// Snapshot of the encoder state after producing `output`.
    pub encoder: E,
}

/// Candidate paths sorted by metric, descending. A new path is inserted
/// before the first entry whose metric is not strictly greater, so it lands
/// behind all strictly better paths and ahead of equal-metric ones.
///
/// The sort order is a hard invariant, not an optimization: tail pruning via
/// [`remove_paths_below_metric`](Self::remove_paths_below_metric) is only
/// correct because [`add_path`](Self::add_path) keeps the list totally
/// ordered at all times. Debug builds assert the invariant after every
/// insertion.
#[derive(Debug, Clone)]
pub struct PathList<E, T> {
    paths: VecDeque<Path<E, T>>,
}

/// Path list over the crate's own encoder with hard-decision bit output.
pub type HardDecisionPathList = PathList<ConvolutionalEncoder, Bit>;

impl<E: Clone, T> PathList<E, T> {
    /// Create a list seeded with a single path: metric 0, empty output, a
    /// copy of `seed_encoder`.
    pub fn new(seed_encoder: &E) -> Self {
        let mut list = Self {
            paths: VecDeque::new(),
        };
        list.add_path(Path {
            metric: 0.0,
            output: Vec::new(),
            encoder: seed_encoder.clone(),
        });
        list
    }

    /// Insert `path` before the first entry whose metric is not strictly
    /// greater, keeping the list sorted descending. Among equal metrics the
    /// newest entry sits in front.
    pub fn add_path(&mut self, path: Path<E, T>) {
        let index = self
            .paths
            .iter()
            .position(|stored| stored.metric <= path.metric)
            .unwrap_or(self.paths.len());
        self.paths.insert(index, path);

        debug_assert!(self.is_sorted());
    }

    /// Remove and return the best (front) path.
    ///
    /// An empty list means the search has exhausted all candidates; that is
    /// an error the caller must propagate, never replace with a stand-in
    /// path.
    pub fn pop_begin(&mut self) -> CodingResult<Path<E, T>> {
        self.paths.pop_front().ok_or(CodingError::EmptyPathList)
    }

    /// Remove every path whose output is shorter than `min_output_len`,
    /// wherever it sits in the list. Used to drop paths that can no longer
    /// reach a required output length.
    pub fn remove_paths_shorter_than(&mut self, min_output_len: usize) {
        self.paths.retain(|path| path.output.len() >= min_output_len);
    }

    /// Pop paths off the worst (tail) end until one with
    /// `metric >= min_metric` is found.
    ///
    /// Relies entirely on the sortedness invariant; a full scan would be
    /// redundant because no entry with a sufficient metric can sit behind an
    /// insufficient one.
    pub fn remove_paths_below_metric(&mut self, min_metric: Metric) {
        while let Some(worst) = self.paths.back() {
            if worst.metric >= min_metric {
                break;
            }
            self.paths.pop_back();
        }
    }

    /// Number of stored paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the list has no paths left.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate the paths front (best) to back (worst).
    pub fn iter(&self) -> impl Iterator<Item = &Path<E, T>> {
        self.paths.iter()
    }

    /// Whether the metrics are non-increasing front to back.
    pub fn is_sorted(&self) -> bool {
        self.paths
            .iter()
            .zip(self.paths.iter().skip(1))
            .all(|(front, back)| front.metric >= back.metric)
    }
}
