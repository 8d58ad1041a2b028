//! Static operation catalogs for the built-in tool groups.
//!
//! Each group is a list of bundles, one per remote API area, and each bundle
//! lists its operations in registration order. Loading a group registers the
//! definitions on the host; request construction for the remote API lives
//! behind the host and is not modelled here.

mod access;
mod domains;
mod infrastructure;
mod integrations;
mod projects;

use crate::tool_groups::{
    domain::{GroupName, OperationDefinition, OperationId, ToolGroupDomainError},
    ports::{GroupLoader, GroupLoaderResult, ToolHost},
    services::GroupRegistry,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Operations of one remote API area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationBundle {
    /// Area label, used in logs.
    pub label: &'static str,
    /// `(operation id, description)` pairs in registration order.
    pub operations: &'static [(&'static str, &'static str)],
}

/// Loader that registers a static catalog of operations.
#[derive(Debug, Clone, Copy)]
pub struct CatalogGroupLoader {
    bundles: &'static [OperationBundle],
}

impl CatalogGroupLoader {
    /// Creates a loader over the given bundles.
    #[must_use]
    pub const fn new(bundles: &'static [OperationBundle]) -> Self {
        Self { bundles }
    }

    /// Returns the bundles this loader registers.
    #[must_use]
    pub const fn bundles(&self) -> &'static [OperationBundle] {
        self.bundles
    }

    /// Builds the operation definitions in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ToolGroupDomainError`] if a catalog entry is blank.
    pub fn definitions(&self) -> Result<Vec<OperationDefinition>, ToolGroupDomainError> {
        self.bundles
            .iter()
            .flat_map(|bundle| bundle.operations.iter())
            .map(|&(id, description)| operation_definition(id, description))
            .collect()
    }
}

#[async_trait]
impl GroupLoader for CatalogGroupLoader {
    async fn register(&self, host: &dyn ToolHost) -> GroupLoaderResult<Vec<OperationId>> {
        let mut registered = Vec::new();
        for bundle in self.bundles {
            for &(id, description) in bundle.operations {
                let definition = operation_definition(id, description)?;
                host.register_tool(&definition).await?;
                registered.push(definition.id().clone());
            }
            debug!(
                bundle = bundle.label,
                operations = bundle.operations.len(),
                "registered operation bundle"
            );
        }
        Ok(registered)
    }
}

fn operation_definition(
    id: &str,
    description: &str,
) -> Result<OperationDefinition, ToolGroupDomainError> {
    OperationDefinition::new(id, description, json!({"type": "object"}))
}

/// Built-in group names with their bundles, in registration order.
const BUILTIN_GROUPS: &[(&str, &[OperationBundle])] = &[
    ("infrastructure", infrastructure::BUNDLES),
    ("access", access::BUNDLES),
    ("projects", projects::BUNDLES),
    ("domains", domains::BUNDLES),
    ("integrations", integrations::BUNDLES),
];

/// Returns the built-in groups paired with their catalog loaders.
///
/// # Errors
///
/// Returns [`ToolGroupDomainError`] if a built-in group name is invalid.
pub fn builtin_groups() -> Result<Vec<(GroupName, Arc<dyn GroupLoader>)>, ToolGroupDomainError>
{
    BUILTIN_GROUPS
        .iter()
        .map(|&(name, bundles)| {
            let loader: Arc<dyn GroupLoader> = Arc::new(CatalogGroupLoader::new(bundles));
            Ok((GroupName::new(name)?, loader))
        })
        .collect()
}

/// Returns a registry holding every built-in group.
///
/// # Errors
///
/// Returns [`ToolGroupDomainError`] if a built-in group name is invalid.
pub fn default_registry() -> Result<GroupRegistry, ToolGroupDomainError> {
    Ok(GroupRegistry::from_groups(builtin_groups()?))
}
