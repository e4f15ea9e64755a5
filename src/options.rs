//! Formatting options and their resolution.
//!
//! This module provides [`MultiplesStrategy`] and [`StructuredErrorOptions`],
//! the caller-facing configuration of the structured-error transform. Options
//! are partial; resolution fills every unset field from frozen defaults, one
//! field at a time, so overriding one option never disturbs the others.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Default delimiter used to join multiple messages reported for the same
/// path (the `join` strategy).
pub const DEFAULT_JOIN_DELIMITER: &str = "; ";

/// Default delimiter used to join path segments into a rendered key.
pub const DEFAULT_PATH_DELIMITER: &str = ".";

/// How multiple messages reported for the same path are combined.
///
/// The strategy is a closed set, dispatched exhaustively by the formatter;
/// every group of messages is formatted by exactly one of these policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultiplesStrategy {
    /// Join a group's messages into a single string with the join delimiter.
    /// This is the default.
    #[default]
    Join,
    /// Keep a group's messages as an array, even when there is only one.
    Array,
    /// Collapse a one-message group to a bare string; keep larger groups as
    /// arrays.
    ArrayIfMultiple,
}

impl MultiplesStrategy {
    /// Returns the canonical name of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            MultiplesStrategy::Join => "join",
            MultiplesStrategy::Array => "array",
            MultiplesStrategy::ArrayIfMultiple => "array-if-multiple",
        }
    }

    /// Looks up a strategy by its canonical name.
    ///
    /// Unrecognized names fall through to [`MultiplesStrategy::Join`]; a
    /// strategy name is never a reason for the transform to fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use triage::MultiplesStrategy;
    ///
    /// assert_eq!(
    ///     MultiplesStrategy::from_name("array-if-multiple"),
    ///     MultiplesStrategy::ArrayIfMultiple,
    /// );
    /// assert_eq!(
    ///     MultiplesStrategy::from_name("no-such-strategy"),
    ///     MultiplesStrategy::Join,
    /// );
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "array" => MultiplesStrategy::Array,
            "array-if-multiple" => MultiplesStrategy::ArrayIfMultiple,
            _ => MultiplesStrategy::Join,
        }
    }
}

impl Display for MultiplesStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied formatting options.
///
/// Every field is optional; unset fields resolve to the frozen defaults
/// (`join` strategy, `"; "` join delimiter, `"."` path delimiter). The merge
/// is per-field: supplying only a path delimiter leaves the strategy and the
/// join delimiter at their defaults.
///
/// Options can be built by struct literal or by chaining:
///
/// # Example
///
/// ```rust
/// use triage::{MultiplesStrategy, StructuredErrorOptions};
///
/// let options = StructuredErrorOptions::new()
///     .with_multiples_strategy(MultiplesStrategy::Array)
///     .with_path_delimiter("/");
///
/// assert_eq!(options.multiples_strategy, Some(MultiplesStrategy::Array));
/// assert_eq!(options.join_delimiter, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredErrorOptions {
    /// How to handle multiple issues for the same path. Default: join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiples_strategy: Option<MultiplesStrategy>,
    /// Delimiter to use when joining multiple messages for the same path.
    /// Default: `"; "`. Ignored unless the resolved strategy is join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_delimiter: Option<String>,
    /// Delimiter to use when joining path segments. Default: `"."`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_delimiter: Option<String>,
}

impl StructuredErrorOptions {
    /// Creates options with every field unset, resolving to all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the multiples strategy and returns self for chaining.
    pub fn with_multiples_strategy(mut self, strategy: MultiplesStrategy) -> Self {
        self.multiples_strategy = Some(strategy);
        self
    }

    /// Sets the join delimiter and returns self for chaining.
    pub fn with_join_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.join_delimiter = Some(delimiter.into());
        self
    }

    /// Sets the path delimiter and returns self for chaining.
    pub fn with_path_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.path_delimiter = Some(delimiter.into());
        self
    }

    /// Resolves these options over the defaults, field by field.
    pub(crate) fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            strategy: self.multiples_strategy.unwrap_or_default(),
            join_delimiter: self
                .join_delimiter
                .clone()
                .unwrap_or_else(|| DEFAULT_JOIN_DELIMITER.to_string()),
            path_delimiter: self
                .path_delimiter
                .clone()
                .unwrap_or_else(|| DEFAULT_PATH_DELIMITER.to_string()),
        }
    }
}

/// A fully resolved option set, every field populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedOptions {
    pub(crate) strategy: MultiplesStrategy,
    pub(crate) join_delimiter: String,
    pub(crate) path_delimiter: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_options_resolve_to_defaults() {
        let resolved = StructuredErrorOptions::new().resolve();

        assert_eq!(resolved.strategy, MultiplesStrategy::Join);
        assert_eq!(resolved.join_delimiter, "; ");
        assert_eq!(resolved.path_delimiter, ".");
    }

    #[test]
    fn test_merge_is_per_field() {
        // Overriding one field must not reset the others.
        let resolved = StructuredErrorOptions::new()
            .with_path_delimiter("/")
            .resolve();

        assert_eq!(resolved.strategy, MultiplesStrategy::Join);
        assert_eq!(resolved.join_delimiter, DEFAULT_JOIN_DELIMITER);
        assert_eq!(resolved.path_delimiter, "/");

        let resolved = StructuredErrorOptions::new()
            .with_join_delimiter(", ")
            .resolve();

        assert_eq!(resolved.strategy, MultiplesStrategy::Join);
        assert_eq!(resolved.join_delimiter, ", ");
        assert_eq!(resolved.path_delimiter, DEFAULT_PATH_DELIMITER);
    }

    #[test]
    fn test_caller_values_take_precedence() {
        let resolved = StructuredErrorOptions::new()
            .with_multiples_strategy(MultiplesStrategy::ArrayIfMultiple)
            .with_join_delimiter(" | ")
            .with_path_delimiter("::")
            .resolve();

        assert_eq!(resolved.strategy, MultiplesStrategy::ArrayIfMultiple);
        assert_eq!(resolved.join_delimiter, " | ");
        assert_eq!(resolved.path_delimiter, "::");
    }

    #[test]
    fn test_struct_literal_options() {
        let options = StructuredErrorOptions {
            multiples_strategy: Some(MultiplesStrategy::Array),
            ..Default::default()
        };
        let resolved = options.resolve();

        assert_eq!(resolved.strategy, MultiplesStrategy::Array);
        assert_eq!(resolved.join_delimiter, "; ");
    }

    #[test]
    fn test_strategy_default_is_join() {
        assert_eq!(MultiplesStrategy::default(), MultiplesStrategy::Join);
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in [
            MultiplesStrategy::Join,
            MultiplesStrategy::Array,
            MultiplesStrategy::ArrayIfMultiple,
        ] {
            assert_eq!(MultiplesStrategy::from_name(strategy.as_str()), strategy);
        }
    }

    #[test]
    fn test_unknown_strategy_name_falls_through_to_join() {
        assert_eq!(MultiplesStrategy::from_name(""), MultiplesStrategy::Join);
        assert_eq!(
            MultiplesStrategy::from_name("concatenate"),
            MultiplesStrategy::Join,
        );
        assert_eq!(
            MultiplesStrategy::from_name("ARRAY"),
            MultiplesStrategy::Join,
        );
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(MultiplesStrategy::ArrayIfMultiple.to_string(), "array-if-multiple");
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(
            serde_json::to_value(MultiplesStrategy::Join).unwrap(),
            json!("join"),
        );
        assert_eq!(
            serde_json::to_value(MultiplesStrategy::ArrayIfMultiple).unwrap(),
            json!("array-if-multiple"),
        );

        let strategy: MultiplesStrategy = serde_json::from_value(json!("array")).unwrap();
        assert_eq!(strategy, MultiplesStrategy::Array);
    }

    #[test]
    fn test_options_serde_camel_case() {
        let options: StructuredErrorOptions = serde_json::from_value(json!({
            "multiplesStrategy": "array-if-multiple",
            "pathDelimiter": "/"
        }))
        .unwrap();

        assert_eq!(
            options.multiples_strategy,
            Some(MultiplesStrategy::ArrayIfMultiple),
        );
        assert_eq!(options.join_delimiter, None);
        assert_eq!(options.path_delimiter.as_deref(), Some("/"));
    }
}
