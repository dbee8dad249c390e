//! Built-in predicates
//!
//! Every predicate reads the value stored under one field (`None` when the
//! field is missing or `null`) and fails with a message naming that field.
//! Required predicates fail on absent values; the `is_optional_*` variants
//! wrap the same check in [`Optional`](crate::combinators::Optional).
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use warden_validator::foundation::Predicate;
//! use warden_validator::predicates::{is_optional_email, is_true_bool};
//!
//! assert!(is_optional_email().check("email", None).is_ok());
//! assert!(is_true_bool().check("terms", Some(&json!(true))).is_ok());
//! ```

pub mod boolean;
pub mod choice;
pub mod content;
pub mod numeric;
pub mod string;
pub mod temporal;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use boolean::{
    Boolean, DefinedBool, FalseBool, TrueBool, is_bool, is_defined_bool, is_false_bool,
    is_optional_bool, is_true_bool,
};

pub use choice::{Enum, Equal, is_enum, is_equal, is_optional_enum};

pub use content::{Email, Url, is_optional_email, is_optional_uri, is_valid_email, is_valid_uri};

pub use numeric::{Integer, PositiveNumber, is_number, is_optional_number, is_positive_number};

pub use string::{
    DefinedString, NotEmptyString, is_defined_string, is_not_empty_string,
    is_optional_not_empty_string,
};

pub use temporal::{
    DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT, DateInPast, DateTimeFormat, is_date_in_past,
    is_datetime, is_optional_date_in_past, is_optional_datetime,
};
