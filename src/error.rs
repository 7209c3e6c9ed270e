// In: src/error.rs

//! This module defines the single, unified error type for the entire jabl library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

/// The boxed error type that user-supplied element functions may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum JablError {
    // =========================================================================
    // === Combinator Errors (Specific to our library's logic)
    // =========================================================================
    /// The caller supplied invalid or contradictory arguments. Raised before
    /// any element is touched.
    #[error("Precondition violated in `{operation}`: {reason}")]
    PreconditionViolation {
        operation: &'static str,
        reason: String,
    },

    /// A user-supplied function failed while being applied to one element.
    #[error("Element transform failed at index {index}: {source}")]
    ElementTransform {
        index: usize,
        #[source]
        source: BoxError,
    },

    /// A condition chain was evaluated before it was terminated.
    #[error("Incomplete condition chain: {0}")]
    Structural(String),

    #[error("Operation not supported: {0}")]
    NotSupported(String),

    // =========================================================================
    // === Configuration & Runtime Errors
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An error from the Serde JSON library, raised while parsing a `JablConfig`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error opening a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Worker pool could not be built: {0}")]
    WorkerPool(String), // Manual `From` impl below.
}

impl JablError {
    /// Shorthand for building a `PreconditionViolation`.
    pub(crate) fn precondition(operation: &'static str, reason: impl Into<String>) -> Self {
        JablError::PreconditionViolation {
            operation,
            reason: reason.into(),
        }
    }

    /// Wraps a user function's failure with the index of the offending element.
    pub(crate) fn at_index(index: usize, source: impl Into<BoxError>) -> Self {
        JablError::ElementTransform {
            index,
            source: source.into(),
        }
    }

    /// Returns the element index carried by an `ElementTransform` error.
    pub fn element_index(&self) -> Option<usize> {
        match self {
            JablError::ElementTransform { index, .. } => Some(*index),
            _ => None,
        }
    }
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<rayon::ThreadPoolBuildError> for JablError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        JablError::WorkerPool(err.to_string())
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_transform_message_carries_index() {
        let err = JablError::at_index(4, "boom");
        assert_eq!(err.element_index(), Some(4));
        assert_eq!(err.to_string(), "Element transform failed at index 4: boom");
    }

    #[test]
    fn test_precondition_message_names_operation() {
        let err = JablError::precondition("window", "window length must be positive");
        assert!(err.to_string().contains("`window`"));
        assert_eq!(err.element_index(), None);
    }
}
