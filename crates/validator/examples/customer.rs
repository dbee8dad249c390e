//! Customer sanitization example for warden-validator
//!
//! Validates, sanitizes, and raises on a valid and an invalid customer.
//! Observer events go through `TracingObserver` to a `tracing-subscriber`
//! formatter.

use serde::Serialize;
use warden_validator::prelude::*;

#[derive(Serialize)]
struct Customer<'a> {
    username: &'a str,
    email: &'a str,
    firstname: &'a str,
    lastname: &'a str,
    birthday: &'a str,
    telephone_number: &'a str,
    another_id: &'a str,
    another_id2: &'a str,
    hashed_password: &'a str,
}

fn customer_rules() -> RuleSet {
    rule_set! {
        "username" => [is_optional_not_empty_string()],
        "email" => [is_optional_email()],
        "firstname" => [is_optional_not_empty_string()],
        "lastname" => [is_optional_not_empty_string()],
        "birthday" => [is_optional_date_in_past(DEFAULT_DATE_FORMAT)],
        "telephone_number" => [is_optional_not_empty_string()],
        "another_id" => [is_optional_not_empty_string()],
        "another_id2" => [is_optional_not_empty_string()],
        "hashed_password" => [is_optional_not_empty_string()],
    }
}

fn main() -> Result<(), RecordError> {
    tracing_subscriber::fmt().with_target(true).init();

    let valid = Customer {
        username: "User123",
        email: "test@test.de",
        firstname: "Nick",
        lastname: "Meier",
        birthday: "1994-01-01",
        telephone_number: "1234567",
        another_id: "1234",
        another_id2: "12345",
        hashed_password: "HashFOR123",
    };
    let invalid = Customer {
        email: "testtest.de",
        hashed_password: "",
        ..valid
    };

    let validator = Validator::new(customer_rules()).with_observer(TracingObserver);

    for (label, customer) in [("valid", &valid), ("invalid", &invalid)] {
        let record = to_record(customer)?;
        println!("── {label} customer ──");

        let errors = validator.validate(&record);
        println!("validate: {}", serde_json::to_string(&errors)?);

        let clean = validator.sanitize(&record);
        println!("sanitize: {}", Value::Object(clean.into_owned()));

        match validator.validate_and_raise(&record) {
            Ok(()) => println!("raise:    ok"),
            Err(err) => println!("raise:    {err} (field `{}`)", err.field),
        }
    }

    Ok(())
}
