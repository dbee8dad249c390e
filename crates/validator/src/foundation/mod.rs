//! Core validation types and traits
//!
//! - **Traits**: [`Predicate`], [`PredicateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! A predicate receives the immediate field key and the field value and
//! answers `Ok(())` or a [`ValidationError`] whose message names the key:
//!
//! ```
//! use serde_json::json;
//! use warden_validator::foundation::Predicate;
//! use warden_validator::predicates::is_not_empty_string;
//!
//! let err = is_not_empty_string().check("zip", Some(&json!(""))).unwrap_err();
//! assert_eq!(err.message(), "zip should be non-empty string");
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Predicate, PredicateExt};

/// Outcome of a single predicate evaluation.
pub type CheckResult = Result<(), ValidationError>;
