//! Flattening of result trees into path-keyed error maps.

use indexmap::IndexMap;
use serde::Serialize;

use super::{ResultNode, ResultTree};

// ============================================================================
// FLAT ERRORS
// ============================================================================

/// Path-keyed error messages, in rule order.
///
/// A path is present only if at least one leaf under it failed, and never
/// maps to an empty message list.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use warden_validator::predicates::is_optional_not_empty_string;
/// use warden_validator::{rule_set, validate};
///
/// let rules = rule_set! { "address" => { "zip" => [is_optional_not_empty_string()] } };
/// let record = json!({"address": {"zip": ""}});
///
/// let errors = validate(record.as_object().unwrap(), &rules);
/// assert_eq!(errors.get("address.zip"), Some(&["zip should be non-empty string".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatErrors {
    errors: IndexMap<String, Vec<String>>,
}

impl FlatErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded for `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.errors.get(path).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    /// Failing paths in rule order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// `(path, messages)` pairs in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(path, messages)| (path.as_str(), messages.as_slice()))
    }

    /// The first failing path and its first message.
    #[must_use]
    pub fn first(&self) -> Option<(&str, &str)> {
        let (path, messages) = self.errors.first()?;
        messages
            .first()
            .map(|message| (path.as_str(), message.as_str()))
    }

    /// Consumes the map, returning the underlying ordered map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.errors
    }

    fn insert(&mut self, path: String, messages: Vec<String>) {
        debug_assert!(!messages.is_empty(), "empty message list for {path}");
        self.errors.insert(path, messages);
    }
}

impl IntoIterator for FlatErrors {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl From<FlatErrors> for IndexMap<String, Vec<String>> {
    fn from(errors: FlatErrors) -> Self {
        errors.errors
    }
}

// ============================================================================
// FLATTEN
// ============================================================================

pub(super) fn flatten_into(tree: &ResultTree, prefix: &str, separator: &str, out: &mut FlatErrors) {
    for (key, node) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{separator}{key}")
        };
        flatten_node(node, path, separator, out);
    }
}

pub(super) fn flatten_node(node: &ResultNode, path: String, separator: &str, out: &mut FlatErrors) {
    match node {
        ResultNode::Leaf(failures) if failures.is_empty() => {}
        ResultNode::Leaf(failures) => {
            out.insert(
                path,
                failures
                    .iter()
                    .map(|failure| failure.message.to_string())
                    .collect(),
            );
        }
        ResultNode::Group(nested) => flatten_into(nested, &path, separator, out),
    }
}

// ============================================================================
// TESTS
// ============================================================================
