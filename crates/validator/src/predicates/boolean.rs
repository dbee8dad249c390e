//! Boolean predicates

use crate::combinators::Optional;
use crate::foundation::ValidationError;
use crate::record::Value;

crate::predicate! {
    /// Passes when the value is a boolean.
    pub DefinedBool;
    rule(value) { matches!(value, Some(Value::Bool(_))) }
    error(key) { ValidationError::new("defined_bool", format!("{key} should be set and boolean")) }
    fn is_defined_bool();
}

crate::predicate! {
    /// Passes when the value is `true`.
    pub TrueBool;
    rule(value) { matches!(value, Some(Value::Bool(true))) }
    error(key) { ValidationError::new("true_bool", format!("{key} should be set to True")) }
    fn is_true_bool();
}

crate::predicate! {
    /// Passes when the value is `false`.
    pub FalseBool;
    rule(value) { matches!(value, Some(Value::Bool(false))) }
    error(key) { ValidationError::new("false_bool", format!("{key} should be set to False")) }
    fn is_false_bool();
}

crate::predicate! {
    /// Passes for booleans and for the strings `"true"` / `"false"`
    /// (ASCII case-insensitive).
    pub Boolean;
    rule(value) {
        match value {
            Some(Value::Bool(_)) => true,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false"),
            _ => false,
        }
    }
    error(key) { ValidationError::new("bool", format!("{key} should be boolean")) }
    fn is_bool();
}

/// [`Boolean`], letting absent values through.
#[must_use]
pub const fn is_optional_bool() -> Optional<Boolean> {
    Optional::new(Boolean)
}
