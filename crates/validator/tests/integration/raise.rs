//! Raise mode: the first failure becomes an `InvalidRecord`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use warden_validator::prelude::*;

use crate::common::{customer_rules, record};

#[test]
fn first_error_selection() {
    let rules = rule_set! {
        "username" => [is_optional_not_empty_string()],
        "email" => [is_valid_email()],
    };

    let err = validate_and_raise(&record(json!({"username": "User123", "email": "x"})), &rules)
        .unwrap_err();

    assert_eq!(
        err,
        InvalidRecord {
            code: 400,
            message: "email should be valid e-mail address".to_owned(),
            field: "email".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "[400] email should be valid e-mail address");
}

#[rstest]
#[case(json!({"username": "", "email": "x"}), "username", "username should be non-empty string")]
#[case(json!({"username": "a", "address": {"zip": ""}}), "address.zip", "zip should be non-empty string")]
#[case(json!({}), "username", "username should be non-empty string")]
fn strictly_first_error_wins(#[case] input: Value, #[case] field: &str, #[case] message: &str) {
    let err = validate_and_raise(&record(input), &customer_rules()).unwrap_err();
    assert_eq!(err.code, INVALID_REQUEST_CODE);
    assert_eq!(err.field, field);
    assert_eq!(err.message, message);
}

#[test]
fn absent_optional_field_succeeds() {
    let rules = rule_set! { "email" => [is_optional_email()] };
    assert!(validate_and_raise(&record(json!({})), &rules).is_ok());
    assert!(validate_and_raise(&record(json!({"email": null})), &rules).is_ok());
}

#[test]
fn raise_propagates_with_question_mark() {
    fn register(input: &Record, rules: &RuleSet) -> Result<String, InvalidRecord> {
        validate_and_raise(input, rules)?;
        Ok(input["username"].to_string())
    }

    assert!(register(&record(json!({"username": "User123"})), &customer_rules()).is_ok());
    assert_eq!(
        register(&record(json!({"username": ""})), &customer_rules())
            .unwrap_err()
            .field,
        "username"
    );
}
