//! Declarative rule trees.
//!
//! A [`RuleSet`] maps field names to a [`Rule`]: either a leaf list of
//! predicates or a nested rule set. Keys iterate in insertion order, and that
//! order decides which failure counts as "first".

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::foundation::Predicate;

// ============================================================================
// RULE
// ============================================================================

/// A rule for a single field.
#[derive(Clone)]
pub enum Rule {
    /// Predicates applied in order to the field value.
    Leaf(Vec<Arc<dyn Predicate>>),
    /// Rules applied to the field value as a nested record.
    Group(RuleSet),
}

impl Rule {
    /// Builds a leaf from already-shared predicates.
    pub fn leaf<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        Self::Leaf(predicates.into_iter().collect())
    }

    /// Builds a leaf holding a single predicate.
    pub fn single<P>(predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        Self::Leaf(vec![Arc::new(predicate)])
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl From<RuleSet> for Rule {
    fn from(rules: RuleSet) -> Self {
        Self::Group(rules)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(predicates) => write!(f, "Leaf(<{} predicates>)", predicates.len()),
            Self::Group(rules) => f.debug_tuple("Group").field(rules).finish(),
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Insertion-ordered mapping from field name to [`Rule`].
///
/// A key holds exactly one rule; inserting an existing key replaces its rule
/// in place, keeping the key's original position.
///
/// # Examples
///
/// ```
/// use warden_validator::predicates::{is_optional_email, is_optional_not_empty_string};
/// use warden_validator::rules::RuleSet;
///
/// let rules = RuleSet::new()
///     .field("username", is_optional_not_empty_string())
///     .field("email", is_optional_email())
///     .group("address", RuleSet::new().field("zip", is_optional_not_empty_string()));
///
/// assert!(rules.contains_key("address"));
/// assert_eq!(rules.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<String, Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `predicate` to the leaf for `key`.
    ///
    /// Appends when `key` already holds a leaf, otherwise installs a new
    /// single-predicate leaf (replacing a group, if any).
    #[must_use = "builder methods must be chained or built"]
    pub fn field<P>(mut self, key: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        let key = key.into();
        match self.rules.get_mut(&key) {
            Some(Rule::Leaf(predicates)) => predicates.push(Arc::new(predicate)),
            _ => {
                self.rules.insert(key, Rule::single(predicate));
            }
        }
        self
    }

    /// Sets the leaf for `key` to the given predicates.
    #[must_use = "builder methods must be chained or built"]
    pub fn leaf<I>(mut self, key: impl Into<String>, predicates: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        self.rules.insert(key.into(), Rule::leaf(predicates));
        self
    }

    /// Sets `key` to a nested rule set.
    #[must_use = "builder methods must be chained or built"]
    pub fn group(mut self, key: impl Into<String>, rules: RuleSet) -> Self {
        self.rules.insert(key.into(), Rule::Group(rules));
        self
    }

    /// Inserts a rule, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, rule: Rule) -> Option<Rule> {
        self.rules.insert(key.into(), rule)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Field names in rule order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// `(field, rule)` pairs in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(key, rule)| (key.as_str(), rule))
    }
}

impl<K: Into<String>> FromIterator<(K, Rule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, rule)| (k.into(), rule)).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
