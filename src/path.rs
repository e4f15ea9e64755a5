//! Structural path representation for locating validation issues.
//!
//! This module provides [`IssuePath`] and [`PathSegment`] types for building
//! the paths that identify where in a nested data structure an issue was
//! reported, and for rendering those paths into the string keys of a
//! structured error map.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::options::DEFAULT_PATH_DELIMITER;

/// A segment of an issue path.
///
/// Paths are built from segments that represent either field access or array
/// indexing. Segments serialize untagged, so a whole path round-trips as a
/// plain JSON array of strings and numbers (e.g. `["hobbies", 3]`), the shape
/// schema validators commonly report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A field/property access (e.g. `user`, `email`)
    Field(String),
    /// An array index access (e.g. `0`, `42`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// The structural location of a validation issue.
///
/// `IssuePath` represents locations like `users.0.email` and provides
/// methods for building paths incrementally. Rendering joins the segments
/// with a delimiter, converting array indices to their decimal string form;
/// two structurally equal paths always render to the same key under the same
/// delimiter, which is what makes the rendered path usable as a grouping
/// identity.
///
/// # Example
///
/// ```rust
/// use triage::IssuePath;
///
/// let path = IssuePath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "users.0.email");
/// assert_eq!(path.render("/"), "users/0/email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuePath {
    segments: Vec<PathSegment>,
}

impl IssuePath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Renders this path by joining its segments with the given delimiter.
    ///
    /// Index segments render as their decimal string form, with no bracket
    /// notation. The root path renders as the empty string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use triage::IssuePath;
    ///
    /// let path = IssuePath::root().push_field("items").push_index(2);
    ///
    /// assert_eq!(path.render("."), "items.2");
    /// assert_eq!(path.render("/"), "items/2");
    /// assert_eq!(IssuePath::root().render("."), "");
    /// ```
    pub fn render(&self, delimiter: &str) -> String {
        let mut rendered = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                rendered.push_str(delimiter);
            }
            match segment {
                PathSegment::Field(name) => rendered.push_str(name),
                PathSegment::Index(idx) => rendered.push_str(&idx.to_string()),
            }
        }
        rendered
    }
}

impl Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PATH_DELIMITER))
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for IssuePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}
