//! The `Action` argument type: what a selected position becomes.
//!
//! Used by `Sequence::map_when` and by the `Then` / `Otherwise` nodes of a
//! condition chain. The shape is decided once, when the action is built, and
//! matched on per element.

use std::fmt;
use std::sync::Arc;

use crate::error::{BoxError, JablError};
use crate::sequence::Sequence;

type TransformFn<T> = dyn Fn(&T) -> Result<T, BoxError> + Send + Sync;

pub enum Action<T> {
    /// Replace the element with `f(element)`.
    Transform(Arc<TransformFn<T>>),
    /// Replace the element with a fixed value.
    Constant(T),
    /// Replace the element at index `i` with `replacement[i]`.
    Replacement(Sequence<T>),
}

impl<T> Action<T> {
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        Action::Transform(Arc::new(move |x: &T| -> Result<T, BoxError> { Ok(f(x)) }))
    }

    pub fn try_transform<F, E>(f: F) -> Self
    where
        F: Fn(&T) -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Action::Transform(Arc::new(move |x: &T| -> Result<T, BoxError> {
            f(x).map_err(Into::into)
        }))
    }

    pub fn constant(value: T) -> Self {
        Action::Constant(value)
    }

    pub fn replace(replacement: impl Into<Sequence<T>>) -> Self {
        Action::Replacement(replacement.into())
    }

    /// Fails early if a replacement sequence cannot cover `len` elements.
    pub(crate) fn check_len(&self, operation: &'static str, len: usize) -> Result<(), JablError> {
        match self {
            Action::Replacement(r) if r.len() != len => Err(JablError::precondition(
                operation,
                format!(
                    "replacement sequence has {} elements but the sequence has {}",
                    r.len(),
                    len
                ),
            )),
            _ => Ok(()),
        }
    }
}

impl<T: Clone> Action<T> {
    /// Produces the value for position `index`, whose current element is `element`.
    ///
    /// Callers must have passed `check_len` for replacement actions.
    pub(crate) fn apply_at(&self, index: usize, element: &T) -> Result<T, JablError> {
        match self {
            Action::Transform(f) => f(element).map_err(|e| JablError::at_index(index, e)),
            Action::Constant(value) => Ok(value.clone()),
            Action::Replacement(r) => r
                .get(index)
                .cloned()
                .ok_or_else(|| JablError::precondition("map_when", "replacement index out of range")),
        }
    }
}

impl<T: Clone> Clone for Action<T> {
    fn clone(&self) -> Self {
        match self {
            Action::Transform(f) => Action::Transform(Arc::clone(f)),
            Action::Constant(v) => Action::Constant(v.clone()),
            Action::Replacement(r) => Action::Replacement(r.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Transform(_) => f.write_str("Action::Transform(..)"),
            Action::Constant(v) => f.debug_tuple("Action::Constant").field(v).finish(),
            Action::Replacement(r) => f.debug_tuple("Action::Replacement").field(r).finish(),
        }
    }
}

impl<T> From<Sequence<T>> for Action<T> {
    fn from(replacement: Sequence<T>) -> Self {
        Action::Replacement(replacement)
    }
}
