//! Predicate combinators
//!
//! - [`Optional`] - succeeds on absent values, defers to the inner predicate otherwise

pub mod optional;

pub use optional::{Optional, optional};
