// In: src/sequence/reshape.rs

//! Structural combinators: `chunk`, `unchunk`, `window` and `array_window`.
//!
//! These change the shape of a sequence without changing its elements or
//! their order. `chunk` and `unchunk` are exact inverses:
//! `s.chunk(spec)?.unchunk() == s` for every valid `spec`.

use super::Sequence;
use crate::config::ChunkSpec;
use crate::error::JablError;
use crate::kernels::{partition, window};

//==================================================================================
// 1. Chunk / Unchunk
//==================================================================================
impl<T: Clone> Sequence<T> {
    /// Partitions the sequence into contiguous, non-overlapping chunks.
    ///
    /// With `n_chunks = n`, the result holds exactly `n` chunks whose sizes
    /// differ by at most one, larger chunks first. `n_chunks` wins when both
    /// fields are set. Sizing by `chunk_size` alone is not implemented yet and
    /// reports `NotSupported`; setting neither is a `PreconditionViolation`.
    pub fn chunk(&self, spec: ChunkSpec) -> Result<Sequence<Sequence<T>>, JablError> {
        let n_chunks = match (spec.n_chunks, spec.chunk_size) {
            (Some(n), _) => n,
            (None, Some(_)) => {
                return Err(JablError::NotSupported(
                    "chunking by `chunk_size`; pass `n_chunks` instead".to_string(),
                ))
            }
            (None, None) => {
                return Err(JablError::precondition(
                    "chunk",
                    "specify `chunk_size` or `n_chunks`",
                ))
            }
        };

        let bounds = partition::balanced_bounds("chunk", self.len(), n_chunks)?;
        log::trace!("chunk: {} elements into {} chunks", self.len(), n_chunks);

        Ok(bounds
            .into_iter()
            .map(|range| Sequence::from(&self.as_slice()[range]))
            .collect())
    }

    /// Shorthand for `chunk(ChunkSpec::n_chunks(n))`.
    pub fn chunk_into(&self, n_chunks: usize) -> Result<Sequence<Sequence<T>>, JablError> {
        self.chunk(ChunkSpec::n_chunks(n_chunks))
    }

    /// Flattens a sequence of slice-like elements (nested `Sequence`s, `Vec`s
    /// or arrays) back into one sequence, keeping both inter- and intra-chunk
    /// order.
    pub fn unchunk<U>(&self) -> Sequence<U>
    where
        T: AsRef<[U]>,
        U: Clone,
    {
        self.iter()
            .flat_map(|chunk| chunk.as_ref().iter().cloned())
            .collect()
    }
}

//==================================================================================
// 2. Sliding Windows
//==================================================================================
impl<T: Clone> Sequence<T> {
    /// All contiguous windows of length `n`, advancing one element at a time.
    ///
    /// Yields `max(0, len - n + 1)` windows of exactly `n` elements each.
    /// `n == 0` is a `PreconditionViolation`.
    pub fn window(&self, n: usize) -> Result<Sequence<Sequence<T>>, JablError> {
        let windows = window::sliding_windows(self.as_slice(), n)?;
        Ok(windows.into_iter().map(Sequence::new).collect())
    }

    /// Like `window`, with the width fixed at compile time so each window is
    /// an array.
    pub fn array_window<const N: usize>(&self) -> Result<Sequence<[T; N]>, JablError> {
        window::sliding_arrays::<T, N>(self.as_slice()).map(Sequence::new)
    }
}
