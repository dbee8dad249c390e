//! Numeric predicates
//!
//! Integers may arrive as JSON numbers or as strings; a string counts only if
//! it is the canonical spelling of an integer (`"42"`, not `"042"` or `"4.2"`).

use crate::combinators::Optional;
use crate::foundation::ValidationError;
use crate::record::Value;

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => s.parse::<i64>().is_ok_and(|n| n.to_string() == *s),
        _ => false,
    }
}

fn is_positive(value: &Value) -> bool {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(n) => n > 0,
            None => n.as_f64().is_some_and(|f| f.trunc() > 0.0),
        },
        Value::String(s) => s.trim().parse::<i64>().is_ok_and(|n| n > 0),
        _ => false,
    }
}

crate::predicate! {
    /// Passes when the value is an integer.
    pub Integer;
    rule(value) { value.is_some_and(is_integer) }
    error(key) { ValidationError::new("integer", format!("{key} should be integer number")) }
    fn is_number();
}

/// [`Integer`], letting absent values through.
#[must_use]
pub const fn is_optional_number() -> Optional<Integer> {
    Optional::new(Integer)
}

crate::predicate! {
    /// Passes when the value is a number (or numeric string) whose integer
    /// part is greater than zero.
    pub PositiveNumber;
    rule(value) { value.is_some_and(is_positive) }
    error(key) { ValidationError::new("positive_number", format!("{key} should be positive number")) }
    fn is_positive_number();
}
