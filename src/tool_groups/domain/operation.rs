//! Operation definition value object.

use super::{OperationId, ToolGroupDomainError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata for an operation a group loader registers on the host surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDefinition {
    id: OperationId,
    description: String,
    input_schema: Value,
}

impl OperationDefinition {
    /// Creates an operation definition.
    ///
    /// # Errors
    ///
    /// Returns [`ToolGroupDomainError`] when the identifier or description is
    /// empty.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Result<Self, ToolGroupDomainError> {
        let operation_id = OperationId::new(id)?;

        let normalized_description = description.into().trim().to_owned();
        if normalized_description.is_empty() {
            return Err(ToolGroupDomainError::EmptyOperationDescription);
        }

        Ok(Self {
            id: operation_id,
            description: normalized_description,
            input_schema,
        })
    }

    /// Returns the operation identifier.
    #[must_use]
    pub const fn id(&self) -> &OperationId {
        &self.id
    }

    /// Returns the operation description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the input schema.
    #[must_use]
    pub const fn input_schema(&self) -> &Value {
        &self.input_schema
    }
}
