//! Built-in predicates inside a realistic rule set.

use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use warden_validator::prelude::*;

use crate::common::record;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Gender {
    Male,
    Female,
    Diverse,
}

fn signup_rules() -> RuleSet {
    rule_set! {
        "username" => [is_not_empty_string()],
        "email" => [is_valid_email()],
        "homepage" => [is_optional_uri()],
        "age" => [is_optional_number()],
        "gender" => [is_optional_enum::<Gender>()],
        "birthday" => [is_optional_date_in_past(DEFAULT_DATE_FORMAT)],
        "created_at" => [is_optional_datetime(DEFAULT_DATETIME_FORMAT)],
        "terms" => [is_true_bool()],
        "newsletter" => [is_optional_bool()],
        "plan" => [is_equal(json!("free"))],
        "seats" => [is_positive_number()],
    }
}

#[test]
fn well_formed_signup_passes() {
    let input = record(json!({
        "username": "User123",
        "email": "test@test.de",
        "homepage": "https://example.com",
        "age": "42",
        "gender": "diverse",
        "birthday": "1994-01-01",
        "created_at": "2021-07-02T06:01:53.781835+00:00",
        "terms": true,
        "newsletter": "False",
        "plan": "free",
        "seats": 3,
    }));

    assert_eq!(validate(&input, &signup_rules()), FlatErrors::new());
}

#[test]
fn minimal_signup_passes() {
    let input = record(json!({
        "username": "User123",
        "email": "test@test.de",
        "terms": true,
        "plan": "free",
        "seats": "1",
    }));

    assert!(validate(&input, &signup_rules()).is_empty());
}

#[test]
fn every_message_names_the_field() {
    let input = record(json!({
        "username": "",
        "email": "testtest.de",
        "homepage": "invalid",
        "age": "4.2",
        "gender": "unknown",
        "birthday": "2999-01-01",
        "created_at": "yesterday",
        "terms": false,
        "newsletter": "maybe",
        "plan": "pro",
        "seats": 0,
    }));

    let errors = validate(&input, &signup_rules());
    let messages: Vec<&str> = errors
        .iter()
        .flat_map(|(_, messages)| messages.iter().map(String::as_str))
        .collect();

    assert_eq!(
        messages,
        [
            "username should be non-empty string",
            "email should be valid e-mail address",
            "homepage should be valid URL",
            "age should be integer number",
            "gender should be valid Gender",
            "birthday should be valid date in past",
            "created_at should be valid datetime",
            "terms should be set to True",
            "newsletter should be boolean",
            "plan should be equal free",
            "seats should be positive number",
        ]
    );
}

#[test]
fn optional_wrapper_defers_to_inner() {
    let rules = RuleSet::new().field("nickname", optional(is_not_empty_string()));

    assert!(validate(&record(json!({})), &rules).is_empty());
    assert!(validate(&record(json!({"nickname": null})), &rules).is_empty());
    assert_eq!(
        validate(&record(json!({"nickname": ""})), &rules)
            .get("nickname")
            .unwrap(),
        ["nickname should be non-empty string"]
    );
}

predicate! {
    /// Accepts German postcodes.
    Postcode;
    rule(value) {
        value
            .and_then(Value::as_str)
            .is_some_and(|s| s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit()))
    }
    error(key) { ValidationError::new("postcode", format!("{key} should be valid postcode")) }
    fn is_postcode();
}

#[test]
fn macro_defined_predicate_in_rule_set() {
    let rules = rule_set! {
        "address" => { "zip" => [is_postcode()] },
    };

    assert!(validate(&record(json!({"address": {"zip": "10115"}})), &rules).is_empty());
    assert_eq!(
        validate(&record(json!({"address": {"zip": "1011"}})), &rules)
            .get("address.zip")
            .unwrap(),
        ["zip should be valid postcode"]
    );
}
