//! Error types for breadcrumb trail operations
//!
//! Every trail operation is local and in-memory, so the only failures are
//! invalid arguments supplied by the caller. There is nothing to retry.

use thiserror::Error;

/// Result type for trail operations
pub type TrailResult<T> = Result<T, TrailError>;

/// Errors returned by trail operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrailError {
    /// A required argument was missing or malformed
    #[error("Invalid argument: {argument} - {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// A negative weight reached an operation that cannot suppress it
    #[error("Invalid weight {weight} for '{label}': weights must not be negative")]
    InvalidWeight { label: String, weight: i32 },

    /// A page identifier did not match any known page type
    #[error("Unknown page type: {name}")]
    UnknownPage { name: String },

    /// A page's parent chain loops back on itself
    #[error("Page hierarchy cycle detected at '{page_id}'")]
    HierarchyCycle { page_id: String },
}

impl TrailError {
    /// Shorthand for [`TrailError::InvalidArgument`]
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}
