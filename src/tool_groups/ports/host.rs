//! Host registration surface port.

use crate::tool_groups::domain::{OperationDefinition, ResourceTemplate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for host registration operations.
pub type ToolHostResult<T> = Result<T, ToolHostError>;

/// Registration contract of the surface that advertises operations.
///
/// Registration is additive only. The host offers no way to retract an
/// operation, so a group dropped from the active set stays callable.
#[async_trait]
pub trait ToolHost: Send + Sync {
    /// Registers an operation.
    ///
    /// Registering the same identifier twice is allowed; the host decides
    /// whether the second registration replaces or duplicates the first.
    async fn register_tool(&self, operation: &OperationDefinition) -> ToolHostResult<()>;

    /// Registers an always-available resource template.
    async fn register_resource(&self, resource: &ResourceTemplate) -> ToolHostResult<()>;
}

/// Errors returned by host adapters.
#[derive(Debug, Clone, Error)]
pub enum ToolHostError {
    /// The host refused a registration.
    #[error("host rejected registration of '{name}': {reason}")]
    Rejected {
        /// Operation or resource name.
        name: String,
        /// Reason string.
        reason: String,
    },

    /// Generic runtime failure.
    #[error("tool host runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ToolHostError {
    /// Creates a rejection error.
    pub fn rejected(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a runtime error from the host adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
