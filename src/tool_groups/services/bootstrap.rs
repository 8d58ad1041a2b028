//! Start-up sequence: register resources, then activate the initial groups.

use super::{GroupLifecycleManager, GroupLoadError};
use crate::tool_groups::{
    domain::{GroupName, ResourceTemplate},
    ports::{ToolHost, ToolHostError},
};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

/// Errors that abort start-up.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A resource template could not be registered.
    #[error("failed to register resource '{name}': {source}")]
    Resource {
        /// Resource name.
        name: String,
        /// Host failure.
        #[source]
        source: ToolHostError,
    },

    /// An initial group could not be loaded.
    #[error("failed to load initial tool group '{group}': {source}")]
    Group {
        /// Requested group name.
        group: String,
        /// Load failure.
        #[source]
        source: GroupLoadError,
    },
}

/// Registers every resource template, then loads `initial_groups` in order.
///
/// Unlike query-driven preloading, any failure here is fatal. Returns the
/// active groups once start-up completes.
///
/// # Errors
///
/// Returns [`BootstrapError`] on the first resource or group that fails.
pub async fn bootstrap<H, C>(
    manager: &GroupLifecycleManager<H, C>,
    resources: &[ResourceTemplate],
    initial_groups: &[String],
) -> Result<Vec<GroupName>, BootstrapError>
where
    H: ToolHost,
    C: Clock + Send + Sync,
{
    for resource in resources {
        manager
            .host()
            .register_resource(resource)
            .await
            .map_err(|source| BootstrapError::Resource {
                name: resource.name().to_owned(),
                source,
            })?;
    }
    info!(resources = resources.len(), "registered resource templates");

    for group in initial_groups {
        manager
            .load_group(group)
            .await
            .map_err(|source| BootstrapError::Group {
                group: group.clone(),
                source,
            })?;
    }

    let active = manager.get_active_groups().await;
    info!(
        active = ?active.iter().map(GroupName::as_str).collect::<Vec<_>>(),
        "tool groups bootstrapped"
    );
    Ok(active)
}
