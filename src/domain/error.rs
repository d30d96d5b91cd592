//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent taxonomy and ledger rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid category segment {segment:?}: {reason}")]
    InvalidSegment { segment: String, reason: String },

    #[error("path not found in taxonomy: {0}")]
    PathNotFound(String),

    #[error("path names a category, not a relationship: {0}")]
    NotALeaf(String),

    #[error("conflicting taxonomy entry: {0}")]
    PathConflict(String),
}
