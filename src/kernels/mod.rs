//! Pure, stateless slice kernels used by the `Sequence` combinators.
//!
//! Kernels take plain slices and return freshly allocated buffers. They know
//! nothing about `Sequence`, predicates or actions.

pub mod mask;
pub mod partition;
pub mod window;

pub use partition::balanced_bounds;
pub use window::window_count;
