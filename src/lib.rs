//! This file is the root of the `jabl` ("Just a Better List") crate.
//!
//! `jabl` wraps an ordered collection in an immutable `Sequence` with a fluent
//! combinator API (`map`, `filter`, `zip`, `map_when`, `chunk`/`unchunk`,
//! `window`) and a prioritized `when(..).then(..).otherwise(..)` construct
//! that rewrites elements branch by branch, first match wins.
//!
//! ```
//! use jabl::{seq, when, Action, Predicate};
//!
//! let data = seq![1i64, 2, 3, 4, 5, 6];
//!
//! let squares_over_five: Vec<i64> = data
//!     .map(|x| x * x)
//!     .filter(|x| *x > 5)
//!     .collect();
//! assert_eq!(squares_over_five, vec![9, 16, 25, 36]);
//!
//! let labelled = when(|x: &i64| x % 2 == 0)
//!     .then(Action::transform(|x: &i64| x * 10))
//!     .when(Predicate::func(|x: &i64| *x == 3))
//!     .then(Action::constant(0))
//!     .otherwise(Action::constant(-1))
//!     .eval(&data)
//!     .unwrap();
//! assert_eq!(labelled.collect(), vec![-1, 20, 0, 40, -1, 60]);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod chain;
pub mod config;
pub mod error;
pub mod kernels;
pub mod logging;
pub mod sequence;
pub mod types;

mod parallel;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use chain::{when, ConditionChain, Otherwise, Then, When};
pub use config::{ChunkSpec, JablConfig, LoggingConfig, ParallelConfig, ZipPolicy};
pub use error::{BoxError, JablError};
pub use sequence::Sequence;
pub use types::{Action, Predicate};
