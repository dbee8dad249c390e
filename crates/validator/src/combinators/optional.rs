//! OPTIONAL combinator - lets absent values through

use serde_json::Value;

use crate::foundation::{Predicate, ValidationError};

/// Succeeds when the value is absent (missing or `null`), otherwise defers
/// to the wrapped predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Optional<P> {
    pub(crate) inner: P,
}

impl<P> Optional<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Predicate> Predicate for Optional<P> {
    fn check(&self, key: &str, value: Option<&Value>) -> Result<(), ValidationError> {
        match value {
            None => Ok(()),
            Some(_) => self.inner.check(key, value),
        }
    }
}

pub const fn optional<P>(predicate: P) -> Optional<P> {
    Optional::new(predicate)
}
