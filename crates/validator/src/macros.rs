//! Macros for declaring predicates and rule sets with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`predicate!`]: struct + `Predicate` impl + factory fn
//! - [`rule_set!`]: nested, insertion-ordered [`RuleSet`](crate::rules::RuleSet) literal
//!
//! # Examples
//!
//! ```
//! use warden_validator::foundation::ValidationError;
//! use warden_validator::predicates::is_optional_not_empty_string;
//! use warden_validator::{predicate, rule_set};
//!
//! predicate! {
//!     /// Accepts only the string "yes".
//!     pub Yes;
//!     rule(value) { value.and_then(|v| v.as_str()) == Some("yes") }
//!     error(key) { ValidationError::new("yes", format!("{key} should be yes")) }
//!     fn is_yes();
//! }
//!
//! let rules = rule_set! {
//!     "consent" => [is_yes()],
//!     "address" => {
//!         "zip" => [is_optional_not_empty_string()],
//!     },
//! };
//! assert_eq!(rules.len(), 2);
//! ```

// ============================================================================
// PREDICATE MACRO
// ============================================================================

/// Creates a complete predicate: struct definition, `Predicate`
/// implementation, constructor, and factory function.
///
/// `value` is bound to `Option<&Value>` (`None` for missing or `null`), `key`
/// to the immediate field name. Unit predicates derive
/// `Debug, Clone, Copy, PartialEq, Eq, Hash, Default`; struct predicates
/// derive `Debug, Clone` plus anything added via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit predicate**:
/// ```rust,ignore
/// predicate! {
///     pub NotEmptyString;
///     rule(value) { matches!(value, Some(Value::String(s)) if !s.is_empty()) }
///     error(key) { ValidationError::new("not_empty_string", format!("{key} should be non-empty string")) }
///     fn is_not_empty_string();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// predicate! {
///     #[derive(PartialEq)]
///     pub Equal { expected: Value };
///     rule(self, value) { value == Some(&self.expected) }
///     error(self, key) { ValidationError::new("equal", format!("{key} should be equal {}", self.expected)) }
///     fn is_equal(expected: Value);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// predicate! {
///     pub DateTimeFormat { format: String };
///     rule(self, value) { parses(value, &self.format) }
///     error(self, key) { ValidationError::new("datetime", format!("{key} should be valid datetime")) }
///     new(format: &str) { Self { format: format.to_owned() } }
///     fn is_datetime(format: &str);
/// }
/// ```
#[macro_export]
macro_rules! predicate {
    // ── Shared `Predicate` impl for struct predicates ────────────────────
    (@impl $name:ident; rule($self_:ident, $val:ident) $rule:block error($key:ident) $err:block) => {
        impl $crate::foundation::Predicate for $name {
            #[allow(unused_variables)]
            fn check(
                &$self_,
                $key: &str,
                $val: ::core::option::Option<&$crate::record::Value>,
            ) -> ::core::result::Result<(), $crate::foundation::ValidationError> {
                if $rule { Ok(()) } else { Err($err) }
            }
        }
    };

    // ── Unit predicate + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($val:ident) $rule:block
        error($key:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name;
            rule($val) $rule
            error($key) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit predicate, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($val:ident) $rule:block
        error($key:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Predicate for $name {
            #[allow(unused_variables)]
            fn check(
                &self,
                $key: &str,
                $val: ::core::option::Option<&$crate::record::Value>,
            ) -> ::core::result::Result<(), $crate::foundation::ValidationError> {
                if $rule { Ok(()) } else { Err($err) }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $val:ident) $rule:block
        error($self2:ident, $key:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::predicate!(@impl $name; rule($self_, $val) $rule error($key) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $val:ident) $rule:block
        error($self2:ident, $key:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::predicate!(@impl $name; rule($self_, $val) $rule error($key) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// RULE SET MACRO
// ============================================================================

/// Builds a [`RuleSet`](crate::rules::RuleSet) literal.
///
/// `[...]` declares a leaf (predicates run in the listed order), `{...}` a
/// nested group. Keys keep the order they are written in.
///
/// ```
/// use warden_validator::predicates::{is_optional_email, is_optional_not_empty_string};
/// use warden_validator::rule_set;
///
/// let rules = rule_set! {
///     "username" => [is_optional_not_empty_string()],
///     "email" => [is_optional_email()],
///     "address" => {
///         "zip" => [is_optional_not_empty_string()],
///     },
/// };
///
/// let keys: Vec<&str> = rules.keys().collect();
/// assert_eq!(keys, ["username", "email", "address"]);
/// ```
#[macro_export]
macro_rules! rule_set {
    () => {
        $crate::rules::RuleSet::new()
    };
    ($($key:literal => $rule:tt),+ $(,)?) => {{
        let mut rules = $crate::rules::RuleSet::new();
        $( rules.insert($key, $crate::__rule!($rule)); )+
        rules
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule {
    ([$($predicate:expr),* $(,)?]) => {
        $crate::rules::Rule::Leaf(::std::vec![
            $(
                ::std::sync::Arc::new($predicate)
                    as ::std::sync::Arc<dyn $crate::foundation::Predicate>
            ),*
        ])
    };
    ({$($inner:tt)*}) => {
        $crate::rules::Rule::Group($crate::rule_set!($($inner)*))
    };
}

// ============================================================================
// TESTS
// ============================================================================
