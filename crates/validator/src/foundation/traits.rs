//! Core traits for the validation system
//!
//! Every leaf check implements [`Predicate`]. The engine knows nothing about
//! concrete checks; it only calls `check` with the immediate field key and the
//! field value.

use std::sync::Arc;

use serde_json::Value;

use crate::combinators::Optional;
use crate::foundation::ValidationError;

// ============================================================================
// PREDICATE TRAIT
// ============================================================================

/// A check applied to a single field of a record.
///
/// `key` is the immediate field name, never the dotted path, so messages read
/// `"zip should be ..."` even when the field lives under `address`. `value` is
/// `None` when the field is missing or JSON `null`.
///
/// Implementations must not panic for any input: a malformed value is a
/// failure, not a crash.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use warden_validator::foundation::{Predicate, ValidationError};
///
/// struct Adult;
///
/// impl Predicate for Adult {
///     fn check(&self, key: &str, value: Option<&Value>) -> Result<(), ValidationError> {
///         match value.and_then(Value::as_u64) {
///             Some(age) if age >= 18 => Ok(()),
///             _ => Err(ValidationError::new("adult", format!("{key} should be adult age"))),
///         }
///     }
/// }
///
/// assert!(Adult.check("age", Some(&json!(30))).is_ok());
/// assert!(Adult.check("age", None).is_err());
/// ```
pub trait Predicate: Send + Sync {
    /// Checks `value`, stored under `key`.
    fn check(&self, key: &str, value: Option<&Value>) -> Result<(), ValidationError>;
}

/// Any suitable closure is a predicate.
impl<F> Predicate for F
where
    F: Fn(&str, Option<&Value>) -> Result<(), ValidationError> + Send + Sync,
{
    fn check(&self, key: &str, value: Option<&Value>) -> Result<(), ValidationError> {
        self(key, value)
    }
}

// ============================================================================
// PREDICATE EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Predicate`].
pub trait PredicateExt: Predicate + Sized {
    /// Lets absent values through, deferring to `self` otherwise.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Erases the concrete type so the predicate can sit in a rule leaf.
    fn shared(self) -> Arc<dyn Predicate>
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

// ============================================================================
// TESTS
// ============================================================================
