// In: src/parallel.rs

//! Parallel "map over chunks" for large sequences.
//!
//! The input is cut with the same balanced partition as `Sequence::chunk`,
//! every chunk is mapped on a dedicated rayon pool, and the chunk results are
//! reassembled in chunk order no matter which worker finishes first. Each
//! worker reads a disjoint slice of the input.
//!
//! A failure in any worker aborts the whole operation. Rayon stops handing out
//! new chunks once one fails, and the error returned carries the failing
//! element's index in the *whole* sequence. When several chunks fail
//! concurrently, which of their errors is reported is unspecified.

use rayon::prelude::*;

use crate::config::ParallelConfig;
use crate::error::{BoxError, JablError};
use crate::kernels::partition;
use crate::sequence::Sequence;

impl<T: Sync> Sequence<T> {
    /// `try_map` spread across `config.workers` threads.
    ///
    /// Produces exactly what `try_map(f)` would on success.
    pub fn par_try_map<U, E, F>(&self, config: &ParallelConfig, f: F) -> Result<Sequence<U>, JablError>
    where
        U: Send,
        F: Fn(&T) -> Result<U, E> + Send + Sync,
        E: Into<BoxError>,
    {
        if config.workers == 0 {
            return Err(JablError::precondition(
                "par_try_map",
                "at least one worker is required",
            ));
        }

        let bounds = partition::balanced_bounds("par_try_map", self.len(), config.effective_chunks())?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()?;
        log::debug!(
            "par_try_map: {} element(s) in {} chunk(s) on {} worker(s)",
            self.len(),
            bounds.len(),
            config.workers
        );

        let data = self.as_slice();
        let chunks: Vec<Vec<U>> = pool.install(|| {
            bounds
                .into_par_iter()
                .map(|range| {
                    let offset = range.start;
                    data[range]
                        .iter()
                        .enumerate()
                        .map(|(i, x)| f(x).map_err(|e| JablError::at_index(offset + i, e)))
                        .collect::<Result<Vec<U>, JablError>>()
                })
                .collect::<Result<Vec<Vec<U>>, JablError>>()
        })?;

        Ok(chunks.into_iter().flatten().collect())
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_par_try_map_matches_sequential_map() {
        let data: Sequence<u64> = (0..1_000).collect();
        let config = ParallelConfig {
            workers: 4,
            n_chunks: Some(7),
        };

        let parallel = data
            .par_try_map(&config, |x| Ok::<_, JablError>(x * 3))
            .unwrap();
        let sequential = data.map(|x| x * 3);

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_par_try_map_reports_global_index() {
        let data: Sequence<i32> = (0..100).collect();
        let config = ParallelConfig::with_workers(3);

        let result = data.par_try_map(&config, |&x| {
            if x == 73 {
                Err("unlucky element")
            } else {
                Ok(x)
            }
        });

        let err = result.unwrap_err();
        assert_eq!(err.element_index(), Some(73));
    }

    #[test]
    fn test_par_try_map_on_empty_input() {
        let data: Sequence<i32> = Sequence::default();
        let result = data
            .par_try_map(&ParallelConfig::with_workers(2), |x| Ok::<_, JablError>(*x))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_zero_workers_is_precondition_violation() {
        let data = Sequence::from(vec![1, 2, 3]);
        let result = data.par_try_map(&ParallelConfig::with_workers(0), |x| Ok::<_, JablError>(*x));
        assert!(matches!(
            result,
            Err(JablError::PreconditionViolation { operation: "par_try_map", .. })
        ));
    }

    #[test]
    fn test_zero_chunks_names_par_try_map() {
        let data = Sequence::from(vec![1, 2, 3]);
        let config = ParallelConfig {
            workers: 2,
            n_chunks: Some(0),
        };
        let err = data
            .par_try_map(&config, |x| Ok::<_, JablError>(*x))
            .unwrap_err();
        assert!(matches!(
            err,
            JablError::PreconditionViolation { operation: "par_try_map", .. }
        ));
        assert!(err.to_string().contains("`par_try_map`"));
    }

    #[test]
    fn test_huge_chunk_count_is_rejected_not_aborted() {
        let data = Sequence::from(vec![1, 2, 3]);
        let config = ParallelConfig {
            workers: 1,
            n_chunks: Some(usize::MAX),
        };
        let result = data.par_try_map(&config, |x| Ok::<_, JablError>(*x));
        assert!(matches!(
            result,
            Err(JablError::PreconditionViolation { operation: "par_try_map", .. })
        ));
    }
}
