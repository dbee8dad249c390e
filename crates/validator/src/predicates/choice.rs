//! Equality and enumeration predicates

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::combinators::Optional;
use crate::foundation::{Predicate, ValidationError};
use crate::record::Value;

/// Renders a value for an error message. Strings lose their JSON quotes.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// EQUAL
// ============================================================================

crate::predicate! {
    /// Passes when the value equals `expected` exactly (JSON equality).
    #[derive(PartialEq)]
    pub Equal { expected: Value };
    rule(self, value) { value == Some(&self.expected) }
    error(self, key) {
        ValidationError::new("equal", format!("{key} should be equal {}", display_value(&self.expected)))
    }
    fn is_equal(expected: Value);
}

// ============================================================================
// ENUM
// ============================================================================

/// Passes when the value deserializes into `E`.
///
/// Pair with a unit-variant enum to accept a closed set of strings:
///
/// ```
/// use serde::Deserialize;
/// use serde_json::json;
/// use warden_validator::foundation::Predicate;
/// use warden_validator::predicates::is_enum;
///
/// #[derive(Deserialize)]
/// #[serde(rename_all = "lowercase")]
/// enum Plan {
///     Free,
///     Pro,
/// }
///
/// assert!(is_enum::<Plan>().check("plan", Some(&json!("pro"))).is_ok());
/// assert!(is_enum::<Plan>().check("plan", Some(&json!("gold"))).is_err());
/// ```
pub struct Enum<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> Enum<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// The last path segment of `E`'s type name.
    #[must_use]
    pub fn type_name() -> &'static str {
        let full = std::any::type_name::<E>();
        let head = full.split('<').next().unwrap_or(full);
        head.rsplit("::").next().unwrap_or(head)
    }
}

impl<E> Default for Enum<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Enum<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Enum<E> {}

impl<E> fmt::Debug for Enum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Enum<{}>", Self::type_name())
    }
}

impl<E: DeserializeOwned> Predicate for Enum<E> {
    fn check(&self, key: &str, value: Option<&Value>) -> Result<(), ValidationError> {
        let parsed = value.is_some_and(|v| serde_json::from_value::<E>(v.clone()).is_ok());
        if parsed {
            Ok(())
        } else {
            Err(ValidationError::new(
                "enum",
                format!("{key} should be valid {}", Self::type_name()),
            ))
        }
    }
}

/// Creates an [`Enum`] predicate for `E`.
#[must_use]
pub const fn is_enum<E: DeserializeOwned>() -> Enum<E> {
    Enum::new()
}

/// [`Enum`], letting absent values through.
#[must_use]
pub const fn is_optional_enum<E: DeserializeOwned>() -> Optional<Enum<E>> {
    Optional::new(Enum::new())
}
