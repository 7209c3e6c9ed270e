//! This module contains the pure, stateless kernels for sliding windows.
//!
//! Every window is read out of a fully materialized, random-access slice.
//! No cursor is kept between calls, so windowing the output of a previous
//! windowing pass can never observe (or disturb) the earlier pass's state.

use crate::error::JablError;

/// The number of length-`n` windows over `len` elements: `max(0, len - n + 1)`.
pub fn window_count(len: usize, n: usize) -> usize {
    if n == 0 || len < n {
        0
    } else {
        len - n + 1
    }
}

fn check_width(n: usize) -> Result<(), JablError> {
    if n == 0 {
        return Err(JablError::precondition(
            "window",
            "window length must be positive",
        ));
    }
    Ok(())
}

/// Copies every contiguous length-`n` window of `data` into its own `Vec`.
pub fn sliding_windows<T: Clone>(data: &[T], n: usize) -> Result<Vec<Vec<T>>, JablError> {
    check_width(n)?;
    Ok(data.windows(n).map(|w| w.to_vec()).collect())
}

/// Copies every contiguous window of compile-time width `N` into an array.
pub fn sliding_arrays<T: Clone, const N: usize>(data: &[T]) -> Result<Vec<[T; N]>, JablError> {
    check_width(N)?;
    Ok(data
        .windows(N)
        .map(|w| std::array::from_fn(|i| w[i].clone()))
        .collect())
}
