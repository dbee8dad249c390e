//! String content predicates
//!
//! Shape checks for e-mail addresses and URLs.

use std::sync::LazyLock;

use crate::combinators::Optional;
use crate::foundation::ValidationError;
use crate::record::Value;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://[^\s/$.?#][^\s]*\.[^\s]*$").unwrap());

fn matches(regex: &regex::Regex, value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| regex.is_match(s))
}

// ============================================================================
// EMAIL
// ============================================================================

crate::predicate! {
    /// Passes when the value is a string shaped like an e-mail address
    /// (local part, `@`, dotted domain).
    pub Email;
    rule(value) { matches(&EMAIL_REGEX, value) }
    error(key) { ValidationError::new("email", format!("{key} should be valid e-mail address")) }
    fn is_valid_email();
}

/// [`Email`], letting absent values through.
#[must_use]
pub const fn is_optional_email() -> Optional<Email> {
    Optional::new(Email)
}

// ============================================================================
// URL
// ============================================================================

crate::predicate! {
    /// Passes when the value is an `http` or `https` URL with a dotted host.
    pub Url;
    rule(value) { matches(&URL_REGEX, value) }
    error(key) { ValidationError::new("url", format!("{key} should be valid URL")) }
    fn is_valid_uri();
}

/// [`Url`], letting absent values through.
#[must_use]
pub const fn is_optional_uri() -> Optional<Url> {
    Optional::new(Url)
}

// ============================================================================
// TESTS
// ============================================================================
