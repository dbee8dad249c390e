//! Rule evaluation.
//!
//! [`apply`] walks a record against a [`RuleSet`] and returns a
//! [`ResultTree`] shaped exactly like the rule set. [`ResultTree::flatten`]
//! then collapses it into [`FlatErrors`].
//!
//! Evaluation is pure: no I/O, no shared state, nothing caught around
//! predicate calls.

mod flatten;

pub use flatten::FlatErrors;

use crate::foundation::ValidationError;
use crate::record::{self, Record, Value};
use crate::rules::{Rule, RuleSet};

// ============================================================================
// RESULT TREE
// ============================================================================

/// Outcome for a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNode {
    /// Failures of a leaf, in predicate order. Empty means the field passed.
    Leaf(Vec<ValidationError>),
    /// Outcomes of a nested rule set.
    Group(ResultTree),
}

impl ResultNode {
    /// Returns true if any leaf at or below this node failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        match self {
            Self::Leaf(failures) => !failures.is_empty(),
            Self::Group(tree) => tree.has_failures(),
        }
    }

    /// Collapses this node into a path-keyed error map, rooted at `path`.
    #[must_use]
    pub fn flatten(&self, path: &str, separator: &str) -> FlatErrors {
        let mut errors = FlatErrors::new();
        flatten::flatten_node(self, path.to_owned(), separator, &mut errors);
        errors
    }
}

/// Ordered `(field, outcome)` pairs mirroring a [`RuleSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTree {
    entries: Vec<(String, ResultNode)>,
}

impl ResultTree {
    /// Entries in rule order.
    #[must_use]
    pub fn entries(&self) -> &[(String, ResultNode)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if any leaf anywhere in the tree failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|(_, node)| node.has_failures())
    }

    /// Collapses the tree into a path-keyed error map.
    ///
    /// Paths join ancestor keys with `separator`; branches without failures
    /// leave no trace.
    #[must_use]
    pub fn flatten(&self, separator: &str) -> FlatErrors {
        let mut errors = FlatErrors::new();
        flatten::flatten_into(self, "", separator, &mut errors);
        errors
    }
}

impl<'a> IntoIterator for &'a ResultTree {
    type Item = &'a (String, ResultNode);
    type IntoIter = std::slice::Iter<'a, (String, ResultNode)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// APPLY
// ============================================================================

/// Applies `rules` to `record`.
///
/// Leaves evaluate every predicate in order against the immediate key and the
/// field value (`None` when missing or `null`) and keep only the failures.
/// Groups recurse into the field value; when it is absent or not an object
/// the recursion sees an empty record, so only predicates that reject absent
/// values report anything.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use warden_validator::engine::{ResultNode, apply};
/// use warden_validator::predicates::is_not_empty_string;
/// use warden_validator::rule_set;
///
/// let rules = rule_set! { "name" => [is_not_empty_string()] };
/// let record = json!({"name": ""});
///
/// let tree = apply(record.as_object().unwrap(), &rules);
/// let (key, node) = &tree.entries()[0];
/// assert_eq!(key, "name");
/// assert!(matches!(node, ResultNode::Leaf(failures) if failures.len() == 1));
/// ```
#[must_use]
pub fn apply(record: &Record, rules: &RuleSet) -> ResultTree {
    let entries = rules
        .iter()
        .map(|(key, rule)| {
            let node = match rule {
                Rule::Leaf(predicates) => {
                    let value = record::field(record, key);
                    ResultNode::Leaf(
                        predicates
                            .iter()
                            .filter_map(|predicate| predicate.check(key, value).err())
                            .collect(),
                    )
                }
                Rule::Group(nested) => match record.get(key) {
                    Some(Value::Object(child)) => ResultNode::Group(apply(child, nested)),
                    _ => ResultNode::Group(apply(&Record::new(), nested)),
                },
            };
            (key.to_owned(), node)
        })
        .collect();

    ResultTree { entries }
}

// ============================================================================
// TESTS
// ============================================================================
