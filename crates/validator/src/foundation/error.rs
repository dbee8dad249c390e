//! Error type produced by a failing predicate
//!
//! A [`ValidationError`] is the `Err` half of a predicate outcome. It carries
//! a stable machine-readable code and the human-readable message that ends up
//! in the flattened error map.
//!
//! Both fields use `Cow<'static, str>` so the common case of a static code
//! does not allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single predicate failure.
///
/// # Examples
///
/// ```
/// use warden_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("not_empty_string", "zip should be non-empty string");
/// assert_eq!(error.code(), "not_empty_string");
/// assert_eq!(error.message(), "zip should be non-empty string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "not_empty_string", "email", "date_in_past"
    pub code: Cow<'static, str>,

    /// Human-readable message, already mentioning the field key.
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an error with the `custom` code.
    ///
    /// Handy for ad hoc closure predicates.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns the owned message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
