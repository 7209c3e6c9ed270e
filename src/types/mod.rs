//! This module defines the argument types shared by the combinators and the
//! condition chain.
//!
//! Both replace "accept a callable, a constant, or a sequence and sniff which
//! one it is" with a closed enum that is matched once per element.

pub mod action;
pub mod predicate;

// Re-export the main type(s) for easier access.
pub use action::Action;
pub use predicate::Predicate;
