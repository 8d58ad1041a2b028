//! Group loader port.

use super::{ToolHost, ToolHostError};
use crate::tool_groups::domain::{OperationId, ToolGroupDomainError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for group loader invocations.
pub type GroupLoaderResult<T> = Result<T, GroupLoaderError>;

/// Capability that registers one group's operations on a host.
#[async_trait]
pub trait GroupLoader: Send + Sync {
    /// Registers the group's operations and returns their identifiers in
    /// registration order.
    ///
    /// Invoking a loader twice registers its operations twice.
    async fn register(&self, host: &dyn ToolHost) -> GroupLoaderResult<Vec<OperationId>>;
}

/// Errors returned by group loaders.
#[derive(Debug, Clone, Error)]
pub enum GroupLoaderError {
    /// The host refused one of the group's registrations.
    #[error(transparent)]
    Host(#[from] ToolHostError),

    /// The loader produced an invalid operation definition.
    #[error("invalid operation definition: {0}")]
    InvalidDefinition(#[from] ToolGroupDomainError),

    /// Generic loader failure.
    #[error("group loader failed: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl GroupLoaderError {
    /// Wraps an arbitrary loader failure.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
