//! Validated identifiers for tool groups and the operations they register.

use super::ToolGroupDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a tool group name.
const MAX_GROUP_NAME_LENGTH: usize = 64;

/// Validated tool group name.
///
/// Deserialization runs the same validation as [`GroupName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    /// Creates a validated group name.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ToolGroupDomainError`] when validation fails.
    pub fn new(value: impl Into<String>) -> Result<Self, ToolGroupDomainError> {
        let normalized = value.into().trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(ToolGroupDomainError::EmptyGroupName);
        }

        let is_valid = normalized.chars().all(|character| {
            character.is_ascii_lowercase() || character.is_ascii_digit() || character == '_'
        });
        if !is_valid {
            return Err(ToolGroupDomainError::InvalidGroupName(normalized));
        }

        if normalized.len() > MAX_GROUP_NAME_LENGTH {
            return Err(ToolGroupDomainError::GroupNameTooLong(normalized));
        }

        Ok(Self(normalized))
    }

    /// Returns the group name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<String> for GroupName {
    type Error = ToolGroupDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> Self {
        name.0
    }
}

/// Identifier of a single operation registered on the host surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(String);

impl OperationId {
    /// Creates an operation identifier from a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ToolGroupDomainError::EmptyOperationId`] when the trimmed
    /// value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ToolGroupDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(ToolGroupDomainError::EmptyOperationId);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OperationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
