//! Date and time predicates
//!
//! Formats use chrono's strftime syntax. A format with an offset (`%z`)
//! yields an absolute instant; without one the timestamp is read in the local
//! time zone; a date-only format means midnight of that day.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::combinators::Optional;
use crate::foundation::ValidationError;
use crate::record::Value;

/// Default format for [`is_datetime`], e.g. `2021-07-02T06:01:53.781835+00:00`.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Default format for [`is_date_in_past`], e.g. `1994-01-01`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_instant(input: &str, format: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_str(input, format) {
        return Some(instant.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(input, format).ok().or_else(|| {
        NaiveDate::parse_from_str(input, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

fn parse_value(value: Option<&Value>, format: &str) -> Option<DateTime<Utc>> {
    parse_instant(value?.as_str()?, format)
}

// ============================================================================
// DATETIME
// ============================================================================

crate::predicate! {
    /// Passes when the value is a string matching the configured format.
    pub DateTimeFormat { format: String };
    rule(self, value) { parse_value(value, &self.format).is_some() }
    error(self, key) { ValidationError::new("datetime", format!("{key} should be valid datetime")) }
    new(format: &str) { Self { format: format.to_owned() } }
    fn is_datetime(format: &str);
}

impl Default for DateTimeFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATETIME_FORMAT)
    }
}

/// [`DateTimeFormat`], letting absent values through.
#[must_use]
pub fn is_optional_datetime(format: &str) -> Optional<DateTimeFormat> {
    Optional::new(is_datetime(format))
}

// ============================================================================
// DATE IN PAST
// ============================================================================

crate::predicate! {
    /// Passes when the value parses with the configured format and lies
    /// strictly before the current time.
    pub DateInPast { format: String };
    rule(self, value) { parse_value(value, &self.format).is_some_and(|instant| instant < Utc::now()) }
    error(self, key) { ValidationError::new("date_in_past", format!("{key} should be valid date in past")) }
    new(format: &str) { Self { format: format.to_owned() } }
    fn is_date_in_past(format: &str);
}

impl Default for DateInPast {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

/// [`DateInPast`], letting absent values through.
#[must_use]
pub fn is_optional_date_in_past(format: &str) -> Optional<DateInPast> {
    Optional::new(is_date_in_past(format))
}

// ============================================================================
// TESTS
// ============================================================================
