//! Sanitize mode: dropping unexpected and invalid top-level fields.

use std::borrow::Cow;

use pretty_assertions::assert_eq;
use serde_json::json;
use warden_validator::prelude::*;

use crate::common::{customer_rules, record};

#[test]
fn identity_on_success() {
    let input = record(json!({
        "username": "User123",
        "email": "test@test.de",
        "role": "admin",
    }));

    let clean = sanitize(&input, &customer_rules());

    assert!(matches!(clean, Cow::Borrowed(_)));
    assert_eq!(*clean, input, "unexpected keys survive when nothing failed");
}

#[test]
fn failure_prunes_invalid_and_unexpected_fields() {
    let input = record(json!({
        "username": "User123",
        "email": "testtest.de",
        "address": {"zip": "12345"},
        "role": "admin",
    }));

    let clean = sanitize(&input, &customer_rules());

    assert_eq!(
        clean.into_owned(),
        record(json!({
            "username": "User123",
            "address": {"zip": "12345"},
        }))
    );
}

#[test]
fn nested_failure_prunes_whole_top_level_field() {
    let input = record(json!({
        "username": "User123",
        "address": {"zip": "", "street": "Main St 1"},
    }));

    let clean = sanitize(&input, &customer_rules());

    assert_eq!(*clean, record(json!({"username": "User123"})));
}

#[test]
fn empty_separator_still_prunes_nested_failure() {
    let validator = Validator::new(customer_rules())
        .with_options(ValidatorOptions::default().with_separator(""));
    let input = record(json!({
        "username": "User123",
        "address": {"zip": ""},
    }));

    assert!(validator.validate(&input).contains("addresszip"));
    assert_eq!(*validator.sanitize(&input), record(json!({"username": "User123"})));
}

#[test]
fn required_field_missing_prunes_nothing_else() {
    let input = record(json!({"email": "test@test.de"}));

    let clean = sanitize(&input, &customer_rules());

    assert!(matches!(clean, Cow::Owned(_)));
    assert_eq!(*clean, input);
}

#[test]
fn idempotent_once_pruned() {
    let rules = customer_rules();
    let input = record(json!({
        "username": "",
        "email": "test@test.de",
        "address": {"zip": ""},
        "extra": 1,
    }));

    let once = sanitize(&input, &rules).into_owned();
    let twice = sanitize(&once, &rules);

    assert_eq!(*twice, once);
    assert_eq!(once, record(json!({"email": "test@test.de"})));
}

#[test]
fn input_is_never_mutated() {
    let input = record(json!({"username": "", "role": "admin"}));
    let before = input.clone();

    let _ = sanitize(&input, &customer_rules());

    assert_eq!(input, before);
}

#[test]
fn sanitize_with_custom_separator() {
    let validator = Validator::new(customer_rules())
        .with_options(ValidatorOptions::default().with_separator("::"));
    let input = record(json!({"username": "User123", "address": {"zip": ""}}));

    assert_eq!(
        validator.validate(&input).paths().collect::<Vec<_>>(),
        ["address::zip"]
    );
    assert_eq!(*validator.sanitize(&input), record(json!({"username": "User123"})));
}
