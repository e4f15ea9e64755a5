//! Structured error output and the formatting transform.
//!
//! This module provides [`StructuredError`], the path-keyed error map this
//! crate exists to produce, and [`to_structured_error`], the transform that
//! builds one from a validation report. Formatting applies the resolved
//! [`MultiplesStrategy`] to each group of messages sharing a rendered path.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::grouping::group_issues;
use crate::issue::ValidationReport;
use crate::options::{MultiplesStrategy, ResolvedOptions, StructuredErrorOptions};

/// The formatted message(s) recorded under one rendered path.
///
/// A group of messages comes out of the formatter either joined into a
/// single string or kept as an ordered array, depending on the strategy.
/// `ErrorMessages` serializes untagged: `Single` as a JSON string, `Multiple`
/// as a JSON array of strings, which is exactly the `string | string[]`
/// shape form renderers and API consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessages {
    /// One message string: the join output, or a collapsed singleton group.
    Single(String),
    /// An ordered sequence of messages.
    Multiple(Vec<String>),
}

impl ErrorMessages {
    /// Returns the message if this is a `Single`, or `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ErrorMessages::Single(message) => Some(message),
            ErrorMessages::Multiple(_) => None,
        }
    }

    /// Returns the messages if this is a `Multiple`, or `None` otherwise.
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            ErrorMessages::Single(_) => None,
            ErrorMessages::Multiple(messages) => Some(messages),
        }
    }

    /// Returns the messages as a slice regardless of variant.
    ///
    /// A `Single` is viewed as a one-element slice.
    pub fn messages(&self) -> &[String] {
        match self {
            ErrorMessages::Single(message) => std::slice::from_ref(message),
            ErrorMessages::Multiple(messages) => messages,
        }
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages().len()
    }

    /// Returns true if there are no messages.
    ///
    /// The formatter never produces an empty value; this can only be true
    /// for a hand-built `Multiple` with an empty vector.
    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    /// Returns an iterator over the messages.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.messages().iter()
    }

    /// Converts this value to a `serde_json::Value`.
    pub fn to_json(&self) -> Value {
        match self {
            ErrorMessages::Single(message) => Value::String(message.clone()),
            ErrorMessages::Multiple(messages) => Value::Array(
                messages
                    .iter()
                    .map(|message| Value::String(message.clone()))
                    .collect(),
            ),
        }
    }
}

/// A structured, path-keyed validation error map.
///
/// `StructuredError` is the final artifact of the transform: a mapping from
/// rendered path to formatted [`ErrorMessages`], ready to be returned from
/// an API handler or fanned out to form fields. Every entry corresponds to
/// one group of input issues; no group is dropped or invented. The map is
/// freshly constructed per call and shares no state with other invocations.
///
/// Entries keep the order in which their path first appeared in the input,
/// though callers should not rely on key order.
///
/// # Example
///
/// ```rust
/// use triage::{to_structured_error, Issue, IssuePath, StructuredErrorOptions, ValidationReport};
///
/// let report = ValidationReport::from(vec![
///     Issue::new(IssuePath::root().push_field("email"), "invalid email"),
///     Issue::new(
///         IssuePath::root().push_field("address").push_field("zipCode"),
///         "must be 5 digits",
///     ),
/// ]);
///
/// let structured = to_structured_error(&report, &StructuredErrorOptions::new());
///
/// assert_eq!(structured.len(), 2);
/// assert!(structured.contains_path("address.zipCode"));
/// assert_eq!(
///     serde_json::to_value(&structured).unwrap(),
///     serde_json::json!({
///         "email": "invalid email",
///         "address.zipCode": "must be 5 digits"
///     }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredError {
    entries: IndexMap<String, ErrorMessages>,
}

impl StructuredError {
    /// Returns the formatted messages for a rendered path, if present.
    pub fn get(&self, path: &str) -> Option<&ErrorMessages> {
        self.entries.get(path)
    }

    /// Returns true if an entry exists for the rendered path.
    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Returns the number of entries (distinct rendered paths).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the rendered path keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns an iterator over `(rendered path, formatted messages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorMessages)> {
        self.entries.iter().map(|(path, value)| (path.as_str(), value))
    }

    /// Converts this map to a `serde_json::Value` object.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (path, messages) in &self.entries {
            map.insert(path.clone(), messages.to_json());
        }
        Value::Object(map)
    }
}

impl FromIterator<(String, ErrorMessages)> for StructuredError {
    fn from_iter<I: IntoIterator<Item = (String, ErrorMessages)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StructuredError {
    type Item = (String, ErrorMessages);
    type IntoIter = indexmap::map::IntoIter<String, ErrorMessages>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a StructuredError {
    type Item = (&'a String, &'a ErrorMessages);
    type IntoIter = indexmap::map::Iter<'a, String, ErrorMessages>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// StructuredError is handed across task and thread boundaries in API
// servers; assert it stays Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<StructuredError>();
    assert_sync::<StructuredError>();
};

/// Converts a validation report into a structured error map.
///
/// The report's issues are grouped by rendered path (under the resolved path
/// delimiter) and each group's messages are formatted by the resolved
/// [`MultiplesStrategy`]. The transform is a pure, synchronous, single pass
/// over the issues: it never fails, and an empty report yields an empty map.
///
/// # Example
///
/// ```rust
/// use triage::{
///     to_structured_error, Issue, IssuePath, MultiplesStrategy, StructuredErrorOptions,
///     ValidationReport,
/// };
///
/// let report = ValidationReport::from(vec![
///     Issue::new(IssuePath::root().push_field("intval"), "must be at least 10"),
///     Issue::new(IssuePath::root().push_field("intval"), "must be a multiple of 2"),
/// ]);
///
/// // Default strategy joins with "; "
/// let joined = to_structured_error(&report, &StructuredErrorOptions::new());
/// assert_eq!(
///     joined.get("intval").and_then(|m| m.as_str()),
///     Some("must be at least 10; must be a multiple of 2"),
/// );
///
/// // The array strategy keeps every group as an ordered sequence
/// let options = StructuredErrorOptions::new()
///     .with_multiples_strategy(MultiplesStrategy::Array);
/// let arrays = to_structured_error(&report, &options);
/// assert_eq!(
///     arrays.get("intval").and_then(|m| m.as_array()),
///     Some(&["must be at least 10".to_string(), "must be a multiple of 2".to_string()][..]),
/// );
/// ```
pub fn to_structured_error(
    report: &ValidationReport,
    options: &StructuredErrorOptions,
) -> StructuredError {
    let resolved = options.resolve();
    group_issues(report.issues(), &resolved.path_delimiter)
        .into_iter()
        .map(|(path, messages)| (path, format_messages(messages, &resolved)))
        .collect()
}

impl ValidationReport {
    /// Converts this report into a structured error map.
    ///
    /// Method form of [`to_structured_error`].
    pub fn to_structured_error(&self, options: &StructuredErrorOptions) -> StructuredError {
        to_structured_error(self, options)
    }
}

/// Applies the resolved strategy to one group's messages.
fn format_messages(mut messages: Vec<String>, options: &ResolvedOptions) -> ErrorMessages {
    match options.strategy {
        MultiplesStrategy::Join => ErrorMessages::Single(messages.join(&options.join_delimiter)),
        MultiplesStrategy::Array => ErrorMessages::Multiple(messages),
        MultiplesStrategy::ArrayIfMultiple => {
            if messages.len() > 1 {
                ErrorMessages::Multiple(messages)
            } else {
                // the grouper seeds every key with its first message, so a
                // group never arrives empty
                ErrorMessages::Single(messages.pop().unwrap_or_default())
            }
        }
    }
}
