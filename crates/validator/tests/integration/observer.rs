//! Observer wiring through `Validator`.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serde_json::json;
use warden_validator::prelude::*;

use crate::common::{customer_rules, record};

type Log = Arc<Mutex<Vec<(EventLevel, &'static str, String)>>>;

fn recording_validator(options: ValidatorOptions) -> (Validator, Log) {
    let log = Log::default();
    let sink = Arc::clone(&log);
    let validator = Validator::new(customer_rules())
        .with_options(options)
        .with_observer(move |event: &ValidationEvent<'_>| {
            let payload = match event {
                ValidationEvent::InvalidField { value, .. } => {
                    value.map(ToString::to_string).unwrap_or_default()
                }
                _ => String::new(),
            };
            sink.lock()
                .unwrap()
                .push((event.level(), event.name(), payload));
        });
    (validator, log)
}

#[test]
fn sanitize_reports_unexpected_then_invalid() {
    let (validator, log) = recording_validator(ValidatorOptions::default());

    let _ = validator.sanitize(&record(json!({
        "role": "admin",
        "username": "User123",
        "address": {"zip": ""},
    })));

    assert_eq!(
        *log.lock().unwrap(),
        [
            (EventLevel::Warning, "unexpected_field", String::new()),
            (EventLevel::Warning, "invalid_field", r#"{"zip":""}"#.to_owned()),
        ]
    );
}

#[test]
fn sanitize_success_reports_only_unexpected() {
    let (validator, log) = recording_validator(ValidatorOptions::default());

    let _ = validator.sanitize(&record(json!({"username": "User123", "role": "admin"})));

    assert_eq!(
        *log.lock().unwrap(),
        [(EventLevel::Warning, "unexpected_field", String::new())]
    );
}

#[test]
fn payloads_can_be_suppressed() {
    let (validator, log) =
        recording_validator(ValidatorOptions::default().with_include_payloads(false));

    let _ = validator.sanitize(&record(json!({"username": "User123", "address": {"zip": ""}})));

    assert_eq!(
        *log.lock().unwrap(),
        [(EventLevel::Warning, "invalid_field", String::new())]
    );
}

#[test]
fn raise_reports_validating_info() {
    let (validator, log) = recording_validator(ValidatorOptions::default());

    assert!(validator.validate_and_raise(&record(json!({"username": ""}))).is_err());

    assert_eq!(
        *log.lock().unwrap(),
        [(EventLevel::Info, "validating", String::new())]
    );
}

#[test]
fn validate_is_silent() {
    let (validator, log) = recording_validator(ValidatorOptions::default());

    let _ = validator.validate(&record(json!({"role": "admin"})));

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn tracing_observer_runs_under_subscriber() {
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();

    tracing::subscriber::with_default(subscriber, || {
        let validator = Validator::new(customer_rules()).with_observer(TracingObserver);
        let input = record(json!({"username": "", "role": "admin"}));
        let clean = validator.sanitize(&input);
        assert!(clean.is_empty());
    });
}
