//! Prelude module for convenient imports.
//!
//! `use warden_validator::prelude::*;` brings in the record and rule types,
//! the validator entry points, every built-in predicate, and both macros.

// ============================================================================
// FOUNDATION: Contract and records
// ============================================================================

pub use crate::foundation::{CheckResult, Predicate, PredicateExt, ValidationError};
pub use crate::record::{Record, RecordError, Value, to_record};

// ============================================================================
// RULES AND EVALUATION
// ============================================================================

pub use crate::engine::{FlatErrors, ResultNode, ResultTree};
pub use crate::rules::{Rule, RuleSet};
pub use crate::validator::{
    INVALID_REQUEST_CODE, InvalidRecord, Validator, sanitize, validate, validate_and_raise,
};

// ============================================================================
// CONFIGURATION AND EVENTS
// ============================================================================

pub use crate::observer::{
    EventLevel, NoopObserver, TracingObserver, ValidationEvent, ValidationObserver,
};
pub use crate::options::ValidatorOptions;

// ============================================================================
// PREDICATES AND COMBINATORS
// ============================================================================

pub use crate::combinators::{Optional, optional};

#[allow(clippy::wildcard_imports)]
pub use crate::predicates::*;

pub use crate::{predicate, rule_set};
