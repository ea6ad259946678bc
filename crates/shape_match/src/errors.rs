//! Errors raised while building matchers.
//!
//! Matching itself never fails; a value of the wrong shape is a non-match.

use thiserror::Error;

/// Errors that can occur when constructing a matcher.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A struct matcher was requested for a value that is not a record.
    #[error("expected a struct value, got {found}")]
    NotRecordType { found: &'static str },
}
