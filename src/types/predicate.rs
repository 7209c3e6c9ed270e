//! The `Predicate` argument type, accepted by `filter_by`, `map_when` and the
//! `When` nodes of a condition chain.

use std::fmt;
use std::sync::Arc;

use crate::error::{BoxError, JablError};
use crate::kernels::mask;
use crate::sequence::Sequence;

type PredicateFn<T> = dyn Fn(&T) -> Result<bool, BoxError> + Send + Sync;

/// Selects positions of a sequence, either by testing each element or by a
/// boolean mask computed up front.
pub enum Predicate<T> {
    /// A per-element test. A failure aborts the enclosing operation with the
    /// element's index.
    Func(Arc<PredicateFn<T>>),
    /// A pre-computed mask. Must be exactly as long as the sequence it is
    /// applied to.
    Mask(Sequence<bool>),
}

impl<T> Predicate<T> {
    /// Wraps an infallible per-element test.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Predicate::Func(Arc::new(move |x: &T| -> Result<bool, BoxError> { Ok(f(x)) }))
    }

    /// Wraps a per-element test that may fail.
    pub fn try_func<F, E>(f: F) -> Self
    where
        F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Predicate::Func(Arc::new(move |x: &T| -> Result<bool, BoxError> {
            f(x).map_err(Into::into)
        }))
    }

    pub fn mask(mask: impl Into<Sequence<bool>>) -> Self {
        Predicate::Mask(mask.into())
    }

    /// Normalizes the predicate to a boolean sequence as long as `data`.
    ///
    /// `operation` names the caller in any `PreconditionViolation`.
    pub fn resolve(
        &self,
        operation: &'static str,
        data: &Sequence<T>,
    ) -> Result<Sequence<bool>, JablError> {
        match self {
            Predicate::Func(f) => data.try_map(|x| f(x)),
            Predicate::Mask(m) => {
                mask::check_len(operation, m.as_slice(), data.len())?;
                Ok(m.clone())
            }
        }
    }

    /// Fails early if a mask predicate cannot match `len` elements.
    pub(crate) fn check_len(&self, operation: &'static str, len: usize) -> Result<(), JablError> {
        match self {
            Predicate::Func(_) => Ok(()),
            Predicate::Mask(m) => mask::check_len(operation, m.as_slice(), len),
        }
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        match self {
            Predicate::Func(f) => Predicate::Func(Arc::clone(f)),
            Predicate::Mask(m) => Predicate::Mask(m.clone()),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Func(_) => f.write_str("Predicate::Func(..)"),
            Predicate::Mask(m) => f.debug_tuple("Predicate::Mask").field(m).finish(),
        }
    }
}

impl<T> From<Sequence<bool>> for Predicate<T> {
    fn from(mask: Sequence<bool>) -> Self {
        Predicate::Mask(mask)
    }
}
