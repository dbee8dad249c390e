//! Validation engine and flattening through the public API.

use pretty_assertions::assert_eq;
use serde_json::json;
use warden_validator::prelude::*;

use crate::common::{customer_rules, record};

#[test]
fn valid_record_yields_empty_map() {
    let errors = validate(
        &record(json!({
            "username": "User123",
            "email": "test@test.de",
            "address": {"zip": "12345"},
        })),
        &customer_rules(),
    );
    assert!(errors.is_empty());
}

#[test]
fn nested_path_composition() {
    let rules = rule_set! {
        "address" => {
            "zip" => [is_optional_not_empty_string()],
        },
    };
    let errors = validate(&record(json!({"address": {"zip": ""}})), &rules);

    assert_eq!(
        errors.into_iter().collect::<Vec<_>>(),
        [(
            "address.zip".to_owned(),
            vec!["zip should be non-empty string".to_owned()]
        )]
    );
}

#[test]
fn errors_follow_rule_order_not_record_order() {
    let errors = validate(
        &record(json!({
            "email": "nope",
            "address": {"zip": ""},
            "username": "",
        })),
        &customer_rules(),
    );
    assert_eq!(
        errors.paths().collect::<Vec<_>>(),
        ["username", "email", "address.zip"]
    );
}

#[test]
fn every_failing_predicate_is_reported_in_order() {
    let rules = rule_set! {
        "nickname" => [is_defined_string(), is_not_empty_string(), is_valid_email()],
    };
    let errors = validate(&record(json!({"nickname": 7})), &rules);
    assert_eq!(
        errors.get("nickname").unwrap(),
        [
            "nickname should be set and string",
            "nickname should be non-empty string",
            "nickname should be valid e-mail address",
        ]
    );
}

#[test]
fn missing_parent_means_missing_children() {
    let rules = rule_set! {
        "address" => {
            "zip" => [is_optional_not_empty_string()],
            "street" => [is_not_empty_string()],
        },
    };

    let errors = validate(&record(json!({})), &rules);
    assert_eq!(
        errors.paths().collect::<Vec<_>>(),
        ["address.street"],
        "only predicates rejecting absent values fire"
    );

    let errors = validate(&record(json!({"address": null})), &rules);
    assert_eq!(errors.paths().collect::<Vec<_>>(), ["address.street"]);
}

#[test]
fn scalar_where_group_expected_recurses_into_nothing() {
    let rules = rule_set! {
        "address" => { "zip" => [is_optional_not_empty_string()] },
    };
    assert!(validate(&record(json!({"address": "Main St 1"})), &rules).is_empty());
}

#[test]
fn deep_nesting_builds_full_path() {
    let rules = rule_set! {
        "billing" => {
            "address" => {
                "zip" => [is_not_empty_string()],
            },
        },
    };
    let errors = validate(&record(json!({"billing": {"address": {}}})), &rules);
    assert_eq!(
        errors.get("billing.address.zip").unwrap(),
        ["zip should be non-empty string"]
    );
}

#[test]
fn closures_are_predicates() {
    let rules = RuleSet::new().field(
        "age",
        |key: &str, value: Option<&Value>| match value.and_then(Value::as_u64) {
            Some(age) if age >= 18 => Ok(()),
            _ => Err(ValidationError::new("adult", format!("{key} should be adult"))),
        },
    );

    assert!(validate(&record(json!({"age": 30})), &rules).is_empty());
    assert_eq!(
        validate(&record(json!({"age": 12})), &rules).get("age").unwrap(),
        ["age should be adult"]
    );
}

#[test]
fn result_tree_mirrors_rules() {
    let tree = Validator::new(customer_rules()).apply(&record(json!({"username": ""})));

    let keys: Vec<&str> = tree.entries().iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, ["username", "email", "address"]);
    assert!(matches!(&tree.entries()[2].1, ResultNode::Group(inner) if !inner.has_failures()));
    assert!(tree.has_failures());
}

#[test]
fn flat_errors_serialize_as_object() {
    let errors = validate(&record(json!({"username": ""})), &customer_rules());
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({"username": ["username should be non-empty string"]})
    );
}

#[test]
fn typed_structs_validate_through_to_record() {
    #[derive(serde::Serialize)]
    struct Customer<'a> {
        username: &'a str,
        email: Option<&'a str>,
    }

    let customer = to_record(&Customer {
        username: "User123",
        email: None,
    })
    .unwrap();
    assert!(validate(&customer, &customer_rules()).is_empty());

    assert!(matches!(to_record(&[1, 2, 3]), Err(RecordError::NotAnObject("array"))));
}
