//! Always-available resource templates registered at startup.

use crate::tool_groups::domain::{ResourceTemplate, ToolGroupDomainError};

/// `(name, uri template, upstream path)` for each built-in resource.
const RESOURCE_TABLE: &[(&str, &str, Option<&str>)] = &[
    ("project", "projects://{projectId}", Some("/v9/projects/{projectId}")),
    ("team", "teams://{teamId}", Some("/v2/teams/{teamId}")),
    (
        "deployment",
        "deployments://{deploymentId}",
        Some("/v13/deployments/{deploymentId}"),
    ),
    ("env-vars", "env://{projectId}", Some("/v9/projects/{projectId}/env")),
    ("domains", "domains://{domain}", Some("/v5/domains/{domain}")),
    ("webhook", "webhooks://{webhookId}", Some("/v1/webhooks/{webhookId}")),
    ("user", "users://{userId}", Some("/v2/user")),
    (
        "integration",
        "integrations://{integrationId}",
        Some("/v1/integrations/{integrationId}"),
    ),
    (
        "project-member",
        "project-members://{projectId}/{userId}",
        Some("/v9/projects/{projectId}/members/{userId}"),
    ),
    (
        "access-group",
        "access-groups://{groupId}",
        Some("/v1/access-groups/{groupId}"),
    ),
    ("log-drain", "log-drains://{drainId}", Some("/v1/log-drains/{drainId}")),
    (
        "secret",
        "secrets://{projectId}/{name}",
        Some("/v9/projects/{projectId}/env/{name}"),
    ),
    ("alias", "aliases://{aliasId}", Some("/v2/aliases/{aliasId}")),
    (
        "artifact",
        "artifacts://{projectId}/{artifactId}",
        Some("/v8/artifacts/{projectId}/{artifactId}"),
    ),
    ("certificate", "certs://{certId}", Some("/v5/now/certs/{certId}")),
    (
        "dns",
        "dns://{domain}/{recordId}",
        Some("/v2/domains/{domain}/records/{recordId}"),
    ),
    (
        "marketplace",
        "marketplace://{integration}",
        Some("/v1/marketplace/integrations/{integration}"),
    ),
    (
        "edge-config",
        "edge-config://{configId}",
        Some("/v1/edge-config/{configId}"),
    ),
    (
        "speed-insights",
        "speed-insights://{projectId}",
        Some("/v1/speed-insights/{projectId}"),
    ),
    (
        "security",
        "security://{projectId}",
        Some("/v1/security/projects/{projectId}"),
    ),
    ("auth", "auth://{token}", Some("/v2/user/tokens/{token}")),
    ("config", "config://vercel", None),
];

/// Builds the resource templates registered before any group loads.
///
/// # Errors
///
/// Returns [`ToolGroupDomainError`] if a table entry is incomplete.
pub fn default_resources() -> Result<Vec<ResourceTemplate>, ToolGroupDomainError> {
    RESOURCE_TABLE
        .iter()
        .map(|&(name, uri_template, upstream_path)| {
            let template = ResourceTemplate::new(name, uri_template)?;
            Ok(match upstream_path {
                Some(path) => template.with_upstream_path(path),
                None => template,
            })
        })
        .collect()
}
