//! In-memory host adapter that records registrations.

use crate::tool_groups::{
    domain::{OperationDefinition, ResourceTemplate},
    ports::{ToolHost, ToolHostError, ToolHostResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory registration surface.
///
/// Every registration is appended in call order and duplicates are kept, so
/// tests can observe a group being registered more than once. It is also the
/// host used by the `toolshed` binary.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToolHost {
    state: Arc<RwLock<InMemoryHostState>>,
}

#[derive(Debug, Default)]
struct InMemoryHostState {
    tools: Vec<OperationDefinition>,
    resources: Vec<ResourceTemplate>,
}

impl InMemoryToolHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every registered operation in registration order.
    ///
    /// # Errors
    ///
    /// Returns host runtime errors when lock acquisition fails.
    pub fn registered_tools(&self) -> ToolHostResult<Vec<OperationDefinition>> {
        let state = self
            .state
            .read()
            .map_err(|err| ToolHostError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state.tools.clone())
    }

    /// Counts how many times an operation has been registered.
    ///
    /// # Errors
    ///
    /// Returns host runtime errors when lock acquisition fails.
    pub fn registration_count(&self, operation_id: &str) -> ToolHostResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| ToolHostError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state
            .tools
            .iter()
            .filter(|tool| tool.id().as_str() == operation_id)
            .count())
    }

    /// Returns every registered resource template in registration order.
    ///
    /// # Errors
    ///
    /// Returns host runtime errors when lock acquisition fails.
    pub fn registered_resources(&self) -> ToolHostResult<Vec<ResourceTemplate>> {
        let state = self
            .state
            .read()
            .map_err(|err| ToolHostError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state.resources.clone())
    }
}

#[async_trait]
impl ToolHost for InMemoryToolHost {
    async fn register_tool(&self, operation: &OperationDefinition) -> ToolHostResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ToolHostError::runtime(std::io::Error::other(err.to_string())))?;
        state.tools.push(operation.clone());
        Ok(())
    }

    async fn register_resource(&self, resource: &ResourceTemplate) -> ToolHostResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ToolHostError::runtime(std::io::Error::other(err.to_string())))?;
        if state
            .resources
            .iter()
            .any(|existing| existing.name() == resource.name())
        {
            return Err(ToolHostError::rejected(
                resource.name(),
                "resource already registered",
            ));
        }
        state.resources.push(resource.clone());
        Ok(())
    }
}
