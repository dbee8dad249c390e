//! Validate, sanitize, and raise.
//!
//! A [`Validator`] bundles a [`RuleSet`] with [`ValidatorOptions`] and a
//! [`ValidationObserver`]. The free functions [`validate`], [`sanitize`] and
//! [`validate_and_raise`] run with default options and no observer.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use warden_validator::predicates::{is_not_empty_string, is_optional_email};
//! use warden_validator::{rule_set, sanitize, validate};
//!
//! let rules = rule_set! {
//!     "username" => [is_not_empty_string()],
//!     "email" => [is_optional_email()],
//! };
//!
//! let record = json!({"username": "User123", "email": "nope", "role": "admin"});
//! let record = record.as_object().unwrap();
//!
//! let errors = validate(record, &rules);
//! assert_eq!(errors.get("email").unwrap(), ["email should be valid e-mail address"]);
//!
//! let clean = sanitize(record, &rules);
//! assert_eq!(clean.keys().collect::<Vec<_>>(), ["username"]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::engine::{self, FlatErrors, ResultTree};
use crate::observer::{NoopObserver, ValidationEvent, ValidationObserver};
use crate::options::{DEFAULT_SEPARATOR, ValidatorOptions};
use crate::record::Record;
use crate::rules::RuleSet;

/// Status code carried by [`InvalidRecord`].
pub const INVALID_REQUEST_CODE: u16 = 400;

/// The first failure of a record, raised by [`Validator::validate_and_raise`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct InvalidRecord {
    /// Always [`INVALID_REQUEST_CODE`].
    pub code: u16,
    /// First message of the first failing path.
    pub message: String,
    /// The failing path.
    pub field: String,
}

impl InvalidRecord {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: INVALID_REQUEST_CODE,
            message: message.into(),
            field: field.into(),
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A rule set ready to validate records.
///
/// `Send + Sync`; share it behind an `Arc` or by reference.
#[derive(Clone)]
pub struct Validator {
    rules: RuleSet,
    options: ValidatorOptions,
    observer: Arc<dyn ValidationObserver>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Validator {
    /// Validator with default options and a [`NoopObserver`].
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            options: ValidatorOptions::default(),
            observer: Arc::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: ValidationObserver + 'static,
    {
        self.observer = Arc::new(observer);
        self
    }

    /// Like [`with_observer`](Self::with_observer), for an observer the
    /// caller keeps a handle to.
    #[must_use]
    pub fn with_shared_observer(mut self, observer: Arc<dyn ValidationObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Runs the rules without flattening.
    #[must_use]
    pub fn apply(&self, record: &Record) -> ResultTree {
        engine::apply(record, &self.rules)
    }

    /// Returns every failure keyed by path. Empty means the record is valid.
    #[must_use]
    pub fn validate(&self, record: &Record) -> FlatErrors {
        self.apply(record).flatten(&self.options.separator)
    }

    /// Strips unexpected and invalid top-level fields.
    ///
    /// Fields without a rule are dropped first. If what remains validates,
    /// the input comes back untouched (unexpected fields included);
    /// otherwise a copy without the unexpected fields and without every
    /// top-level field that has a failure at or below it is returned.
    #[must_use]
    pub fn sanitize<'r>(&self, record: &'r Record) -> Cow<'r, Record> {
        sanitize_with(record, &self.rules, &self.options, self.observer.as_ref())
    }

    /// Fails with the first message of the first failing path.
    pub fn validate_and_raise(&self, record: &Record) -> Result<(), InvalidRecord> {
        self.observer.on_event(&ValidationEvent::Validating {
            record: Some(record).filter(|_| self.options.include_payloads),
        });

        match self.validate(record).first() {
            Some((path, message)) => Err(InvalidRecord::new(path, message)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// [`Validator::validate`] with default options.
#[must_use]
pub fn validate(record: &Record, rules: &RuleSet) -> FlatErrors {
    engine::apply(record, rules).flatten(DEFAULT_SEPARATOR)
}

/// [`Validator::sanitize`] with default options and no observer.
#[must_use]
pub fn sanitize<'r>(record: &'r Record, rules: &RuleSet) -> Cow<'r, Record> {
    sanitize_with(record, rules, &ValidatorOptions::default(), &NoopObserver)
}

fn sanitize_with<'r>(
    record: &'r Record,
    rules: &RuleSet,
    options: &ValidatorOptions,
    observer: &dyn ValidationObserver,
) -> Cow<'r, Record> {
    let mut copy = record.clone();
    copy.retain(|key, _| {
        let expected = rules.contains_key(key);
        if !expected {
            observer.on_event(&ValidationEvent::UnexpectedField { key });
        }
        expected
    });

    let tree = engine::apply(&copy, rules);
    if !tree.has_failures() {
        return Cow::Borrowed(record);
    }

    for (field, node) in tree.entries() {
        if !node.has_failures() {
            continue;
        }
        let errors = node.flatten(field, &options.separator);
        observer.on_event(&ValidationEvent::InvalidField {
            field,
            value: copy.get(field).filter(|_| options.include_payloads),
            errors: &errors,
        });
        copy.shift_remove(field);
    }

    Cow::Owned(copy)
}

/// [`Validator::validate_and_raise`] with default options and no observer.
pub fn validate_and_raise(record: &Record, rules: &RuleSet) -> Result<(), InvalidRecord> {
    match validate(record, rules).first() {
        Some((path, message)) => Err(InvalidRecord::new(path, message)),
        None => Ok(()),
    }
}
