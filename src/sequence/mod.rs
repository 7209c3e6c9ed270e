// In: src/sequence/mod.rs

//! The `Sequence` container: an immutable, ordered, finite collection of
//! elements that exposes the combinator API.
//!
//! A `Sequence` never changes after construction. Every combinator borrows its
//! receiver and returns a brand new `Sequence` backed by its own storage, so
//! results that share ancestry never share buffers. The combinators live in:
//!
//! - `combinators`: `map`, `try_map`, `filter*`, `zip*`, `map_when`, `fold`
//! - `reshape`: `chunk`, `unchunk`, `window`, `array_window`
//! - `crate::parallel`: `par_try_map`

use std::ops::Index;

//==================================================================================
// 1. Module Declarations
//==================================================================================
mod combinators;
mod reshape;

#[cfg(test)]
mod law_tests;

//==================================================================================
// 2. The Sequence Type
//==================================================================================

/// An immutable ordered collection of elements of one type.
///
/// Equality is element-wise and order-sensitive. `Clone` copies the backing
/// storage, so a clone is fully independent of its source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    data: Vec<T>,
}

impl<T> Sequence<T> {
    /// Builds a sequence that takes ownership of `data`.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// A read-only view of the elements, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the sequence and hands back its storage without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns the elements as a `Vec` that the caller owns outright.
    ///
    /// Each call produces a fresh copy; mutating it never affects this
    /// sequence or any previously collected copy.
    pub fn collect(&self) -> Vec<T> {
        self.data.clone()
    }
}

//==================================================================================
// 3. Conversions & Iteration
//==================================================================================

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(data: [T; N]) -> Self {
        Self::new(Vec::from(data))
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

/// Builds a `Sequence` from a literal list of elements, like `vec!`.
///
/// ```
/// use jabl::{seq, Sequence};
///
/// let s: Sequence<i32> = seq![1, 2, 3];
/// assert_eq!(s.collect(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Sequence::new(::std::vec![$($element),+])
    };
}
