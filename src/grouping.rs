//! Grouping of validation issues by rendered path.
//!
//! This module provides [`group_issues`], the first stage of the
//! structured-error transform. Grouping partitions an ordered issue sequence
//! into an insertion-ordered map from rendered path to the messages recorded
//! under it, and is exposed on its own for callers who want raw grouped
//! messages without formatting.

use indexmap::IndexMap;

use crate::issue::Issue;

/// Ordered mapping from rendered path to the messages recorded under it.
///
/// Keys appear in the order their path first appeared in the input; messages
/// within a key preserve input order.
pub type GroupedIssues = IndexMap<String, Vec<String>>;

/// Groups issues by their rendered path.
///
/// Issues are visited in input order. Each issue's path is rendered by
/// joining its segments with `path_delimiter` (array indices in decimal
/// form); the first issue seen for a path starts that path's group, and
/// every later issue with an equal path appends to it. Messages are not
/// sorted, deduplicated, or otherwise normalized, so the total message count
/// across all groups always equals the input issue count. An issue with an
/// empty path is grouped under the empty-string key.
///
/// # Example
///
/// ```rust
/// use triage::{group_issues, Issue, IssuePath};
///
/// let issues = vec![
///     Issue::new(IssuePath::root().push_field("intval"), "must be at least 10"),
///     Issue::new(IssuePath::root().push_field("intval"), "must be a multiple of 2"),
///     Issue::new(
///         IssuePath::root().push_field("names").push_index(1),
///         "expected string, received number",
///     ),
/// ];
///
/// let groups = group_issues(&issues, ".");
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(
///     groups["intval"],
///     vec!["must be at least 10", "must be a multiple of 2"],
/// );
/// assert_eq!(groups["names.1"], vec!["expected string, received number"]);
/// ```
pub fn group_issues(issues: &[Issue], path_delimiter: &str) -> GroupedIssues {
    let mut groups = GroupedIssues::new();
    for issue in issues {
        groups
            .entry(issue.path.render(path_delimiter))
            .or_default()
            .push(issue.message.clone());
    }
    groups
}
