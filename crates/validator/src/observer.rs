//! Validation events and the observers that receive them.
//!
//! The validator reports what it does (unexpected fields dropped, invalid
//! fields pruned, a record about to be validated) through an injected
//! [`ValidationObserver`]. The default is [`NoopObserver`];
//! [`TracingObserver`] forwards events to `tracing`.
//!
//! Any `Fn(&ValidationEvent<'_>) + Send + Sync` closure is an observer too:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use warden_validator::observer::{ValidationEvent, ValidationObserver};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let observer = move |event: &ValidationEvent<'_>| {
//!     sink.lock().unwrap().push(event.to_string());
//! };
//!
//! observer.on_event(&ValidationEvent::UnexpectedField { key: "role" });
//! assert_eq!(seen.lock().unwrap()[0], "dropping unexpected field `role`");
//! ```

use std::fmt;

use crate::engine::FlatErrors;
use crate::record::{Record, Value};

/// Target used by [`TracingObserver`].
pub const TRACING_TARGET: &str = "warden::validator";

/// Severity of a [`ValidationEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventLevel {
    Info,
    Warning,
}

/// Something the validator did that an observer may want to record.
///
/// Payload fields (`record`, `value`) are `None` when the validator is
/// configured without payloads or the field was absent.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum ValidationEvent<'a> {
    /// A record is about to be validated in raise mode.
    Validating { record: Option<&'a Record> },

    /// Sanitize dropped a top-level field that has no rule.
    UnexpectedField { key: &'a str },

    /// Sanitize dropped the top-level field `field`; `errors` holds every
    /// failing path under it.
    InvalidField {
        field: &'a str,
        value: Option<&'a Value>,
        errors: &'a FlatErrors,
    },
}

impl ValidationEvent<'_> {
    #[must_use]
    pub const fn level(&self) -> EventLevel {
        match self {
            Self::Validating { .. } => EventLevel::Info,
            Self::UnexpectedField { .. } | Self::InvalidField { .. } => EventLevel::Warning,
        }
    }

    /// Stable identifier, e.g. `"unexpected_field"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Validating { .. } => "validating",
            Self::UnexpectedField { .. } => "unexpected_field",
            Self::InvalidField { .. } => "invalid_field",
        }
    }
}

impl fmt::Display for ValidationEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating { .. } => write!(f, "validating record"),
            Self::UnexpectedField { key } => write!(f, "dropping unexpected field `{key}`"),
            Self::InvalidField { field, errors, .. } => {
                write!(f, "dropping invalid field `{field}` (")?;
                for (i, (path, messages)) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{path}: {}", messages.join("; "))?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// OBSERVERS
// ============================================================================

/// Receives [`ValidationEvent`]s.
///
/// Called inline on the validating thread; implementations should be fast
/// and must not panic.
pub trait ValidationObserver: Send + Sync {
    fn on_event(&self, event: &ValidationEvent<'_>);
}

impl<F> ValidationObserver for F
where
    F: Fn(&ValidationEvent<'_>) + Send + Sync,
{
    fn on_event(&self, event: &ValidationEvent<'_>) {
        self(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ValidationObserver for NoopObserver {
    fn on_event(&self, _event: &ValidationEvent<'_>) {}
}

/// Emits events through `tracing` under [`TRACING_TARGET`].
///
/// Warnings go to `warn!`, the rest to `info!`. Payloads are rendered as
/// JSON strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn on_event(&self, event: &ValidationEvent<'_>) {
        match *event {
            ValidationEvent::Validating { record } => {
                let record = record.map(|r| Value::Object(r.clone()).to_string());
                tracing::info!(
                    target: TRACING_TARGET,
                    event = event.name(),
                    record = record.as_deref(),
                    "validating record"
                );
            }
            ValidationEvent::UnexpectedField { key } => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    event = event.name(),
                    key,
                    "dropping unexpected field"
                );
            }
            ValidationEvent::InvalidField { field, value, errors } => {
                let value = value.map(Value::to_string);
                let errors = serde_json::to_string(errors).unwrap_or_default();
                tracing::warn!(
                    target: TRACING_TARGET,
                    event = event.name(),
                    field,
                    value = value.as_deref(),
                    errors = errors.as_str(),
                    "dropping invalid field"
                );
            }
        }
    }
}
