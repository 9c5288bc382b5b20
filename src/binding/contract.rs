//! Parameter contracts and the binding step.
//!
//! A contract enumerates the query parameters a route accepts: their names,
//! types, and whether they are required, optional with a default, or optional
//! without one. Binding a contract against the raw query map either yields a
//! fully validated [`BoundParams`] or fails with a [`BindError`] before the
//! handler body runs.

use std::collections::HashMap;

use crate::binding::error::BindError;

/// Value type expected for a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Arbitrary text, bound verbatim.
    Text,
    /// Parsed to `i64`; non-numeric input fails the bind.
    Integer,
    /// Presence-only switch. The key must appear; any value (or none) is accepted.
    Flag,
}

/// Whether a parameter must be present, and what happens when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Absence fails the bind with `MissingParameter`.
    Required,
    /// Absence binds the default, or binds nothing if no default is given.
    Optional { default: Option<&'static str> },
}

/// One parameter in a route's contract.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub requirement: Requirement,
}

impl ParamSpec {
    /// A required text parameter.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
            requirement: Requirement::Required,
        }
    }

    /// An optional text parameter with a default value.
    pub const fn optional_with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
            requirement: Requirement::Optional {
                default: Some(default),
            },
        }
    }

    /// An optional text parameter that binds nothing when absent.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
            requirement: Requirement::Optional { default: None },
        }
    }

    /// A required integer parameter.
    pub const fn required_integer(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Integer,
            requirement: Requirement::Required,
        }
    }

    /// An optional integer parameter with a default value.
    pub const fn optional_integer_with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Integer,
            requirement: Requirement::Optional {
                default: Some(default),
            },
        }
    }

    /// A presence-only parameter (`?new` style, no value needed).
    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Flag,
            requirement: Requirement::Required,
        }
    }
}

/// The full parameter contract for one route.
#[derive(Debug, Clone, Copy)]
pub struct QueryContract {
    params: &'static [ParamSpec],
}

impl QueryContract {
    pub const fn new(params: &'static [ParamSpec]) -> Self {
        Self { params }
    }

    /// Validate and convert the raw query map against this contract.
    ///
    /// Checks run in declaration order and stop at the first violation, so
    /// the client sees one actionable error at a time.
    pub fn bind(&self, raw: &HashMap<String, String>) -> Result<BoundParams, BindError> {
        let mut bound = BoundParams::default();

        for spec in self.params {
            let value = match (raw.get(spec.name), spec.requirement) {
                (Some(v), _) => Some(v.clone()),
                (None, Requirement::Required) => {
                    return Err(BindError::MissingParameter(spec.name.to_string()));
                }
                (None, Requirement::Optional { default }) => default.map(str::to_string),
            };

            let Some(value) = value else {
                continue;
            };

            match spec.kind {
                ParamKind::Text | ParamKind::Flag => {
                    bound.texts.insert(spec.name.to_string(), value);
                }
                ParamKind::Integer => {
                    let parsed: i64 = value.parse().map_err(|_| BindError::InvalidInteger {
                        name: spec.name.to_string(),
                        value: value.clone(),
                    })?;
                    bound.integers.insert(spec.name.to_string(), parsed);
                }
            }
        }

        Ok(bound)
    }
}

/// Parameters that passed a contract bind.
///
/// Accessors return `Option` because optional parameters without a default
/// may legitimately be absent; a parameter the contract requires is always
/// present once binding succeeded.
#[derive(Debug, Default, Clone)]
pub struct BoundParams {
    texts: HashMap<String, String>,
    integers: HashMap<String, i64>,
}

impl BoundParams {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(String::as_str)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.integers.get(name).copied()
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.texts.contains_key(name) || self.integers.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_present_and_missing() {
        const CONTRACT: QueryContract = QueryContract::new(&[ParamSpec::required("name")]);

        let bound = CONTRACT.bind(&raw(&[("name", "petya")])).unwrap();
        assert_eq!(bound.text("name"), Some("petya"));

        let err = CONTRACT.bind(&raw(&[])).unwrap_err();
        assert!(matches!(err, BindError::MissingParameter(n) if n == "name"));
    }

    #[test]
    fn test_optional_default_applied_only_when_absent() {
        const CONTRACT: QueryContract =
            QueryContract::new(&[ParamSpec::optional_with_default("name", "World")]);

        let bound = CONTRACT.bind(&raw(&[])).unwrap();
        assert_eq!(bound.text("name"), Some("World"));

        let bound = CONTRACT.bind(&raw(&[("name", "petya")])).unwrap();
        assert_eq!(bound.text("name"), Some("petya"));
    }

    #[test]
    fn test_optional_without_default_binds_nothing() {
        const CONTRACT: QueryContract = QueryContract::new(&[ParamSpec::optional("error")]);

        let bound = CONTRACT.bind(&raw(&[])).unwrap();
        assert_eq!(bound.text("error"), None);
        assert!(!bound.is_present("error"));
    }

    #[test]
    fn test_integer_conversion() {
        const CONTRACT: QueryContract =
            QueryContract::new(&[ParamSpec::optional_integer_with_default("age", "18")]);

        let bound = CONTRACT.bind(&raw(&[])).unwrap();
        assert_eq!(bound.integer("age"), Some(18));

        let bound = CONTRACT.bind(&raw(&[("age", "20")])).unwrap();
        assert_eq!(bound.integer("age"), Some(20));

        let err = CONTRACT.bind(&raw(&[("age", "abc")])).unwrap_err();
        assert!(matches!(err, BindError::InvalidInteger { ref value, .. } if value == "abc"));
    }

    #[test]
    fn test_flag_accepts_empty_value() {
        const CONTRACT: QueryContract = QueryContract::new(&[ParamSpec::flag("new")]);

        // "?new" with no value arrives as an empty string
        assert!(CONTRACT.bind(&raw(&[("new", "")])).is_ok());
        assert!(CONTRACT.bind(&raw(&[("new", "1")])).is_ok());

        let err = CONTRACT.bind(&raw(&[("other", "x")])).unwrap_err();
        assert!(matches!(err, BindError::MissingParameter(n) if n == "new"));
    }

    #[test]
    fn test_first_violation_wins() {
        const CONTRACT: QueryContract = QueryContract::new(&[
            ParamSpec::required("name"),
            ParamSpec::required_integer("age"),
        ]);

        let err = CONTRACT.bind(&raw(&[("age", "abc")])).unwrap_err();
        assert!(matches!(err, BindError::MissingParameter(n) if n == "name"));
    }
}
