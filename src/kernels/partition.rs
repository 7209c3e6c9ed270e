//! This module contains the pure, stateless kernel that computes balanced,
//! contiguous partitions of an index range.
//!
//! It is shared by `Sequence::chunk` and the parallel chunk map so that both
//! cut the data at exactly the same places. It is fully panic-free.

use std::ops::Range;

use crate::error::JablError;

/// Splits `0..len` into `n_chunks` contiguous ranges whose lengths differ by at
/// most one, with the longer ranges first.
///
/// With `k, m = divmod(len, n_chunks)`, the first `m` ranges hold `k + 1`
/// indices and the rest hold `k`. When `n_chunks > len` the trailing ranges are
/// empty, so the concatenation of all ranges is always exactly `0..len`.
///
/// `operation` names the caller in any `PreconditionViolation`. A chunk count
/// whose range list cannot be allocated is rejected the same way as zero.
pub fn balanced_bounds(
    operation: &'static str,
    len: usize,
    n_chunks: usize,
) -> Result<Vec<Range<usize>>, JablError> {
    if n_chunks == 0 {
        return Err(JablError::precondition(
            operation,
            "n_chunks must be at least 1",
        ));
    }

    let mut bounds = Vec::new();
    bounds.try_reserve_exact(n_chunks).map_err(|_| {
        JablError::precondition(
            operation,
            format!("n_chunks = {} is too large to allocate", n_chunks),
        )
    })?;

    let k = len / n_chunks;
    let m = len % n_chunks;

    bounds.extend((0..n_chunks).map(|i| {
        let start = i * k + i.min(m);
        let end = (i + 1) * k + (i + 1).min(m);
        start..end
    }));
    Ok(bounds)
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let bounds = balanced_bounds("chunk", 6, 3).unwrap();
        assert_eq!(bounds, vec![0..2, 2..4, 4..6]);
    }

    #[test]
    fn test_larger_chunks_come_first() {
        let bounds = balanced_bounds("chunk", 7, 3).unwrap();
        assert_eq!(bounds, vec![0..3, 3..5, 5..7]);

        let bounds = balanced_bounds("chunk", 5, 2).unwrap();
        assert_eq!(bounds, vec![0..3, 3..5]);
    }

    #[test]
    fn test_more_chunks_than_elements_leaves_trailing_empties() {
        let bounds = balanced_bounds("chunk", 2, 4).unwrap();
        assert_eq!(bounds, vec![0..1, 1..2, 2..2, 2..2]);
    }

    #[test]
    fn test_bounds_are_contiguous_and_cover_input() {
        for len in 0..40 {
            for n in 1..12 {
                let bounds = balanced_bounds("chunk", len, n).unwrap();
                assert_eq!(bounds.len(), n);
                assert_eq!(bounds.first().map(|r| r.start), Some(0));
                assert_eq!(bounds.last().map(|r| r.end), Some(len));
                for pair in bounds.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                    assert!(pair[0].len() >= pair[1].len());
                    assert!(pair[0].len() - pair[1].len() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_zero_chunks_is_precondition_violation() {
        let result = balanced_bounds("chunk", 5, 0);
        assert!(matches!(
            result,
            Err(JablError::PreconditionViolation { operation: "chunk", .. })
        ));
    }

    #[test]
    fn test_unallocatable_chunk_count_is_precondition_violation() {
        let result = balanced_bounds("chunk", 3, usize::MAX);
        assert!(matches!(
            result,
            Err(JablError::PreconditionViolation { operation: "chunk", .. })
        ));
    }

    #[test]
    fn test_violation_names_the_calling_operation() {
        let result = balanced_bounds("par_try_map", 5, 0);
        assert!(matches!(
            result,
            Err(JablError::PreconditionViolation { operation: "par_try_map", .. })
        ));
    }
}
