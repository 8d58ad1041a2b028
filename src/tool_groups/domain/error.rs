//! Error types for tool group domain validation.

use thiserror::Error;

/// Errors returned while constructing tool group domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolGroupDomainError {
    /// The group name is empty after trimming.
    #[error("tool group name must not be empty")]
    EmptyGroupName,

    /// The group name contains characters outside `[a-z0-9_]`.
    #[error(
        "tool group name '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidGroupName(String),

    /// The group name exceeds the 64-character limit.
    #[error("tool group name exceeds 64 character limit: {0}")]
    GroupNameTooLong(String),

    /// An operation identifier is empty after trimming.
    #[error("operation identifier must not be empty")]
    EmptyOperationId,

    /// An operation description is empty after trimming.
    #[error("operation description must not be empty")]
    EmptyOperationDescription,

    /// A resource template name or URI template is empty.
    #[error("resource template '{0}' must have a non-empty name and URI template")]
    IncompleteResourceTemplate(String),

    /// The active group capacity must allow at least one group.
    #[error("active group capacity must be greater than zero")]
    ZeroCapacity,
}
