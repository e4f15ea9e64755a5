//! # Triage
//!
//! A library that turns a flat sequence of path-tagged validation issues
//! into a structured, field-keyed error map.
//!
//! ## Overview
//!
//! Validators that accumulate ALL errors hand back a flat list of issues,
//! each tagged with the path of the value it describes. That shape is
//! faithful but awkward for API responses and form rendering, which want
//! errors keyed by field. Triage groups issues by rendered path and formats
//! each group according to a configurable strategy, producing a map like
//! `{"email": "invalid email", "items.2": ["too short", "not unique"]}`.
//!
//! The whole transform is pure and synchronous: no I/O, no shared state,
//! and no failure modes of its own. Malformed or surprising input shapes
//! are absorbed into the output rather than rejected.
//!
//! ## Core Types
//!
//! - [`IssuePath`]: The location of a value in nested data (e.g., `items.2.name`)
//! - [`Issue`]: A single validation issue with context (path, message, expected/got values)
//! - [`ValidationReport`]: An ordered collection of issues, as a validator emits them
//! - [`StructuredError`]: The path-keyed error map this crate produces
//! - [`StructuredErrorOptions`]: Partial configuration resolved against built-in defaults
//!
//! ## Example
//!
//! ```rust
//! use triage::{to_structured_error, Issue, IssuePath, StructuredErrorOptions, ValidationReport};
//!
//! let report = ValidationReport::from(vec![
//!     Issue::new(IssuePath::root().push_field("email"), "invalid email"),
//!     Issue::new(IssuePath::root().push_field("email"), "must not be a disposable address"),
//!     Issue::new(
//!         IssuePath::root().push_field("hobbies").push_index(3),
//!         "must be at least 3 characters",
//!     ),
//! ]);
//!
//! let structured = to_structured_error(&report, &StructuredErrorOptions::new());
//!
//! // Messages sharing a path are joined with "; " by default
//! assert_eq!(
//!     structured.get("email").and_then(|m| m.as_str()),
//!     Some("invalid email; must not be a disposable address"),
//! );
//!
//! // Numeric segments render in decimal, delimiter-separated
//! assert_eq!(
//!     structured.get("hobbies.3").and_then(|m| m.as_str()),
//!     Some("must be at least 3 characters"),
//! );
//! ```

pub mod grouping;
pub mod issue;
pub mod options;
pub mod path;
pub mod structured;

pub use grouping::{group_issues, GroupedIssues};
pub use issue::{Issue, ValidationReport};
pub use options::{
    MultiplesStrategy, StructuredErrorOptions, DEFAULT_JOIN_DELIMITER, DEFAULT_PATH_DELIMITER,
};
pub use path::{IssuePath, PathSegment};
pub use structured::{to_structured_error, ErrorMessages, StructuredError};
