//! # warden-validator
//!
//! Rule-based validation and sanitization of nested records.
//!
//! A [`RuleSet`](rules::RuleSet) maps field names either to a list of
//! predicates (a leaf) or to a nested rule set (a group). Validating a record
//! yields a flat map from dotted field paths to error messages; sanitizing
//! strips unexpected and invalid top-level fields; raising turns the first
//! failure into an [`InvalidRecord`](validator::InvalidRecord).
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use warden_validator::prelude::*;
//!
//! let rules = rule_set! {
//!     "username" => [is_not_empty_string()],
//!     "email" => [is_optional_email()],
//!     "address" => {
//!         "zip" => [is_optional_not_empty_string()],
//!     },
//! };
//!
//! let record = json!({"username": "User123", "address": {"zip": ""}});
//! let errors = validate(record.as_object().unwrap(), &rules);
//! assert_eq!(errors.get("address.zip").unwrap(), ["zip should be non-empty string"]);
//! ```
//!
//! ## Writing Predicates
//!
//! Use the [`predicate!`] macro, implement
//! [`Predicate`](foundation::Predicate) by hand, or pass a closure.
//!
//! ## Built-in Predicates
//!
//! - **Boolean**: [`is_defined_bool`](predicates::is_defined_bool),
//!   [`is_true_bool`](predicates::is_true_bool), [`is_bool`](predicates::is_bool)
//! - **String**: [`is_not_empty_string`](predicates::is_not_empty_string),
//!   [`is_valid_email`](predicates::is_valid_email), [`is_valid_uri`](predicates::is_valid_uri)
//! - **Numeric**: [`is_number`](predicates::is_number),
//!   [`is_positive_number`](predicates::is_positive_number)
//! - **Temporal**: [`is_datetime`](predicates::is_datetime),
//!   [`is_date_in_past`](predicates::is_date_in_past)
//! - **Choice**: [`is_equal`](predicates::is_equal), [`is_enum`](predicates::is_enum)

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod observer;
pub mod options;
pub mod predicates;
pub mod prelude;
pub mod record;
pub mod rules;
pub mod validator;

pub use validator::{sanitize, validate, validate_and_raise};
