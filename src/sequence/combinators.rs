// In: src/sequence/combinators.rs

//! Element-wise combinators: `map`, `filter`, `zip` and `map_when`.
//!
//! Each one runs a single pass over the receiver and materializes its result
//! eagerly. Fallible variants either return a complete `Sequence` or an error;
//! nothing partially built ever escapes.

use super::Sequence;
use crate::config::ZipPolicy;
use crate::error::{BoxError, JablError};
use crate::kernels::mask;
use crate::types::{Action, Predicate};

//==================================================================================
// 1. Map
//==================================================================================
impl<T> Sequence<T> {
    /// Returns a new sequence where element `i` is `f(&self[i])`.
    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        F: Fn(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Like `map`, for functions that can fail.
    ///
    /// Stops at the first failure and reports it as `ElementTransform` with the
    /// failing index.
    pub fn try_map<U, E, F>(&self, f: F) -> Result<Sequence<U>, JablError>
    where
        F: Fn(&T) -> Result<U, E>,
        E: Into<BoxError>,
    {
        self.iter()
            .enumerate()
            .map(|(i, x)| f(x).map_err(|e| JablError::at_index(i, e)))
            .collect::<Result<Vec<U>, JablError>>()
            .map(Sequence::new)
    }
}

//==================================================================================
// 2. Filter
//==================================================================================
impl<T: Clone> Sequence<T> {
    /// Keeps the elements for which `predicate` returns true, in order.
    pub fn filter<F>(&self, predicate: F) -> Sequence<T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|x| predicate(*x)).cloned().collect()
    }

    /// Keeps element `i` iff `mask[i]` is true.
    ///
    /// The mask must be exactly as long as the sequence; a mismatch is a
    /// `PreconditionViolation`, never a silent truncation.
    pub fn filter_mask(&self, mask: &Sequence<bool>) -> Result<Sequence<T>, JablError> {
        mask::check_len("filter", mask.as_slice(), self.len())?;
        Ok(self
            .iter()
            .zip(mask)
            .filter(|&(_, &keep)| keep)
            .map(|(x, _)| x.clone())
            .collect())
    }

    /// Filters by either shape of `Predicate`.
    pub fn filter_by(&self, predicate: &Predicate<T>) -> Result<Sequence<T>, JablError> {
        let keep = predicate.resolve("filter", self)?;
        self.filter_mask(&keep)
    }
}

//==================================================================================
// 3. Zip
//==================================================================================
impl<T: Clone> Sequence<T> {
    /// Pairs elements positionally. The shorter input determines the length
    /// of the result; use `zip_strict` to reject mismatched lengths instead.
    pub fn zip<U: Clone>(&self, other: &Sequence<U>) -> Sequence<(T, U)> {
        self.iter()
            .zip(other)
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }

    /// Pairs elements positionally, failing if the lengths differ.
    pub fn zip_strict<U: Clone>(&self, other: &Sequence<U>) -> Result<Sequence<(T, U)>, JablError> {
        self.zip_with_policy(other, ZipPolicy::Strict)
    }

    pub fn zip_with_policy<U: Clone>(
        &self,
        other: &Sequence<U>,
        policy: ZipPolicy,
    ) -> Result<Sequence<(T, U)>, JablError> {
        if policy == ZipPolicy::Strict && self.len() != other.len() {
            return Err(JablError::precondition(
                "zip",
                format!("lengths differ: {} vs {}", self.len(), other.len()),
            ));
        }
        Ok(self.zip(other))
    }
}

//==================================================================================
// 4. Conditional Map
//==================================================================================
impl<T: Clone> Sequence<T> {
    /// For each index `i`, takes `action`'s value where `predicate` holds and
    /// keeps the original element everywhere else.
    ///
    /// Both a mask predicate and a replacement action must be exactly as long
    /// as the sequence. Those lengths are checked before any element is
    /// touched.
    pub fn map_when(
        &self,
        action: &Action<T>,
        predicate: &Predicate<T>,
    ) -> Result<Sequence<T>, JablError> {
        action.check_len("map_when", self.len())?;
        predicate.check_len("map_when", self.len())?;

        let selected = predicate.resolve("map_when", self)?;
        self.iter()
            .zip(&selected)
            .enumerate()
            .map(|(i, (x, &hit))| {
                if hit {
                    action.apply_at(i, x)
                } else {
                    Ok(x.clone())
                }
            })
            .collect::<Result<Vec<T>, JablError>>()
            .map(Sequence::new)
    }
}

//==================================================================================
// 5. Fold
//==================================================================================
impl<T> Sequence<T> {
    /// Reserved. Folding is part of the declared surface but has no agreed
    /// semantics yet, so every call reports `NotSupported`.
    pub fn fold<A, F>(&self, _init: A, _f: F) -> Result<A, JablError>
    where
        F: Fn(A, &T) -> A,
    {
        Err(JablError::NotSupported(
            "fold/accumulate is not implemented".to_string(),
        ))
    }
}
