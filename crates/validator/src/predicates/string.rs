//! String predicates

use crate::combinators::Optional;
use crate::foundation::ValidationError;
use crate::record::Value;

crate::predicate! {
    /// Passes when the value is a string, empty or not.
    pub DefinedString;
    rule(value) { matches!(value, Some(Value::String(_))) }
    error(key) { ValidationError::new("defined_string", format!("{key} should be set and string")) }
    fn is_defined_string();
}

crate::predicate! {
    /// Passes when the value is a non-empty string.
    pub NotEmptyString;
    rule(value) { matches!(value, Some(Value::String(s)) if !s.is_empty()) }
    error(key) { ValidationError::new("not_empty_string", format!("{key} should be non-empty string")) }
    fn is_not_empty_string();
}

/// [`NotEmptyString`], letting absent values through.
#[must_use]
pub const fn is_optional_not_empty_string() -> Optional<NotEmptyString> {
    Optional::new(NotEmptyString)
}
