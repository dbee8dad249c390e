//! Validator configuration.

use serde::{Deserialize, Serialize};

/// Default path separator.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Knobs for a [`Validator`](crate::validator::Validator).
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// ```
/// use warden_validator::options::ValidatorOptions;
///
/// let options = ValidatorOptions::from_json(r#"{"separator": "/"}"#).unwrap();
/// assert_eq!(options.separator, "/");
/// assert!(options.include_payloads);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Joins nested keys in error paths, and splits them again when sanitize
    /// looks for the top-level field of a failing path.
    pub separator: String,

    /// Whether observer events carry record and field values.
    pub include_payloads: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            include_payloads: true,
        }
    }
}

impl ValidatorOptions {
    /// Parses options from a JSON document.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub const fn with_include_payloads(mut self, include_payloads: bool) -> Self {
        self.include_payloads = include_payloads;
        self
    }
}
