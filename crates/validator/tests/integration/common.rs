//! Shared fixtures.

use serde_json::Value;
use warden_validator::prelude::*;

/// Unwraps a `json!` object literal into a [`Record`].
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

/// Customer rules: a required username, optional e-mail, optional nested zip.
pub fn customer_rules() -> RuleSet {
    rule_set! {
        "username" => [is_not_empty_string()],
        "email" => [is_optional_email()],
        "address" => {
            "zip" => [is_optional_not_empty_string()],
        },
    }
}
