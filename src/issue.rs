//! Validation issue types.
//!
//! This module provides [`Issue`] for a single reported problem and
//! [`ValidationReport`] for the ordered sequence of issues a validation run
//! produced. Both are inputs to the structured-error transform: the transform
//! reads an issue's path and message and nothing else.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::path::IssuePath;

/// A single reported validation problem.
///
/// An issue carries the two attributes the structured-error transform reads:
/// - **path**: where in the data structure the problem was reported
/// - **message**: human-readable description of the problem
///
/// plus optional context that upstream validators commonly attach and that
/// this crate carries through untouched:
/// - **code**: machine-readable code (e.g. `invalid_type`)
/// - **expected**: what was expected instead
/// - **got**: the actual value that was received (formatted as string)
///
/// Issues are immutable inputs; nothing in this crate mutates or reorders
/// them.
///
/// # Example
///
/// ```rust
/// use triage::{Issue, IssuePath};
///
/// let issue = Issue::new(
///     IssuePath::root().push_field("email"),
///     "invalid email format",
/// )
/// .with_code("invalid_email")
/// .with_got("not-an-email")
/// .with_expected("valid email address");
///
/// assert_eq!(issue.code.as_deref(), Some("invalid_email"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// The path to the value the issue was reported against.
    pub path: IssuePath,
    /// Human-readable message describing the problem.
    pub message: String,
    /// Machine-readable code. Opaque to the transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description of what was expected. Opaque to the transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// The actual value that was received. Opaque to the transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub got: Option<String>,
}

impl Issue {
    /// Creates a new issue with the given path and message.
    pub fn new(path: IssuePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code: None,
            expected: None,
            got: None,
        }
    }

    /// Sets the issue code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Sets the "got" (actual value) field and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_str = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };

        write!(f, "{}: {}", path_str, self.message)?;

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

// Issue is Send + Sync since all fields are owned types (String, IssuePath
// with Vec<PathSegment>, Option<String>). Asserted so it stays true if the
// fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issue>();
    assert_sync::<Issue>();
};

/// The ordered collection of issues produced by a validation run.
///
/// `ValidationReport` is the error object this crate consumes: a flat,
/// ordered sequence of issues. Unlike the error collections inside a
/// validator, a report may be empty; converting an empty report produces an
/// empty structured error map.
///
/// Reports combine freely, preserving order:
///
/// ```rust
/// use triage::{Issue, IssuePath, ValidationReport};
///
/// let first = ValidationReport::single(
///     Issue::new(IssuePath::root().push_field("name"), "required"),
/// );
/// let second = ValidationReport::single(
///     Issue::new(IssuePath::root().push_field("email"), "invalid format"),
/// );
///
/// let combined = first.merge(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a report containing a single issue.
    pub fn single(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Appends an issue to the end of the report.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Appends another report's issues after this report's, preserving both
    /// orders, and returns the combined report.
    pub fn merge(mut self, other: Self) -> Self {
        self.issues.extend(other.issues);
        self
    }

    /// Returns the number of issues in this report.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if this report contains no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the issues as an ordered slice.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns an iterator over the contained issues.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    /// Returns all issues reported at the specified path.
    pub fn at_path(&self, path: &IssuePath) -> Vec<&Issue> {
        self.issues.iter().filter(|i| &i.path == path).collect()
    }

    /// Returns all issues carrying the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.code.as_deref() == Some(code))
            .collect()
    }

    /// Converts this report into a `Vec<Issue>`.
    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.len())?;
        for (i, issue) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

impl From<Vec<Issue>> for ValidationReport {
    fn from(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

impl FromIterator<Issue> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl Extend<Issue> for ValidationReport {
    fn extend<I: IntoIterator<Item = Issue>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

impl IntoIterator for ValidationReport {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

// ValidationReport is Send + Sync since it only contains Issue, which is
// Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationReport>();
    assert_sync::<ValidationReport>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_creation() {
        let issue = Issue::new(IssuePath::root().push_field("name"), "field is required");

        assert_eq!(issue.path, IssuePath::root().push_field("name"));
        assert_eq!(issue.message, "field is required");
        assert!(issue.code.is_none());
        assert!(issue.expected.is_none());
        assert!(issue.got.is_none());
    }

    #[test]
    fn test_issue_builder() {
        let issue = Issue::new(IssuePath::root().push_field("age"), "must be positive")
            .with_code("min_value")
            .with_got("-5")
            .with_expected("value >= 0");

        assert_eq!(issue.code, Some("min_value".to_string()));
        assert_eq!(issue.got, Some("-5".to_string()));
        assert_eq!(issue.expected, Some("value >= 0".to_string()));
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::new(IssuePath::root().push_field("email"), "invalid format")
            .with_expected("email address")
            .with_got("not-an-email");

        let display = issue.to_string();
        assert!(display.contains("email: invalid format"));
        assert!(display.contains("expected: email address"));
        assert!(display.contains("got: not-an-email"));
    }

    #[test]
    fn test_issue_display_root() {
        let issue = Issue::new(IssuePath::root(), "value is null");
        let display = issue.to_string();
        assert!(display.contains("(root): value is null"));
    }

    #[test]
    fn test_report_starts_empty() {
        let report = ValidationReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert!(report.issues().is_empty());
    }

    #[test]
    fn test_report_single() {
        let issue = Issue::new(IssuePath::root(), "test");
        let report = ValidationReport::single(issue.clone());

        assert_eq!(report.len(), 1);
        assert!(!report.is_empty());
        assert_eq!(report.issues()[0], issue);
    }

    #[test]
    fn test_report_push_preserves_order() {
        let mut report = ValidationReport::new();
        report.push(Issue::new(IssuePath::root().push_field("a"), "first"));
        report.push(Issue::new(IssuePath::root().push_field("b"), "second"));
        report.push(Issue::new(IssuePath::root().push_field("a"), "third"));

        let messages: Vec<&str> = report.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_report_merge() {
        let first = ValidationReport::single(Issue::new(
            IssuePath::root().push_field("a"),
            "error 1",
        ));
        let second = ValidationReport::single(Issue::new(
            IssuePath::root().push_field("b"),
            "error 2",
        ));

        let combined = first.merge(second);

        assert_eq!(combined.len(), 2);
        assert_eq!(combined.issues()[0].message, "error 1");
        assert_eq!(combined.issues()[1].message, "error 2");
    }

    #[test]
    fn test_report_at_path() {
        let path_a = IssuePath::root().push_field("a");
        let path_b = IssuePath::root().push_field("b");

        let report: ValidationReport = vec![
            Issue::new(path_a.clone(), "error 1"),
            Issue::new(path_a.clone(), "error 2"),
            Issue::new(path_b.clone(), "error 3"),
        ]
        .into();

        assert_eq!(report.at_path(&path_a).len(), 2);
        assert_eq!(report.at_path(&path_b).len(), 1);
    }

    #[test]
    fn test_report_with_code() {
        let report: ValidationReport = vec![
            Issue::new(IssuePath::root().push_field("a"), "error").with_code("required"),
            Issue::new(IssuePath::root().push_field("b"), "error").with_code("format"),
            Issue::new(IssuePath::root().push_field("c"), "error").with_code("required"),
            Issue::new(IssuePath::root().push_field("d"), "error"),
        ]
        .into();

        assert_eq!(report.with_code("required").len(), 2);
        assert_eq!(report.with_code("format").len(), 1);
        assert_eq!(report.with_code("missing").len(), 0);
    }

    #[test]
    fn test_report_display() {
        let report: ValidationReport = vec![
            Issue::new(IssuePath::root().push_field("name"), "required"),
            Issue::new(IssuePath::root().push_field("email"), "invalid"),
        ]
        .into();

        let display = report.to_string();
        assert!(display.contains("2 issue(s)"));
        assert!(display.contains("1. name: required"));
        assert!(display.contains("2. email: invalid"));
    }

    #[test]
    fn test_report_into_iter() {
        let report: ValidationReport = vec![
            Issue::new(IssuePath::root().push_field("a"), "error 1"),
            Issue::new(IssuePath::root().push_field("b"), "error 2"),
        ]
        .into();

        let collected: Vec<Issue> = report.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_report_from_iterator() {
        let report: ValidationReport = (0..3)
            .map(|i| Issue::new(IssuePath::root().push_index(i), "bad element"))
            .collect();

        assert_eq!(report.len(), 3);
        assert_eq!(report.issues()[2].path.to_string(), "2");
    }

    #[test]
    fn test_report_extend() {
        let mut report = ValidationReport::single(Issue::new(
            IssuePath::root().push_field("a"),
            "error 1",
        ));
        report.extend(vec![
            Issue::new(IssuePath::root().push_field("b"), "error 2"),
            Issue::new(IssuePath::root().push_field("c"), "error 3"),
        ]);

        assert_eq!(report.len(), 3);
    }
}
