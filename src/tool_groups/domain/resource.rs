//! Resource template value object.

use super::ToolGroupDomainError;
use serde::{Deserialize, Serialize};

/// A resource registered once at startup and never part of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTemplate {
    name: String,
    uri_template: String,
    upstream_path: Option<String>,
}

impl ResourceTemplate {
    /// Creates a resource template.
    ///
    /// # Errors
    ///
    /// Returns [`ToolGroupDomainError::IncompleteResourceTemplate`] when the
    /// name or URI template is blank.
    pub fn new(
        name: impl Into<String>,
        uri_template: impl Into<String>,
    ) -> Result<Self, ToolGroupDomainError> {
        let normalized_name = name.into().trim().to_owned();
        let normalized_uri = uri_template.into().trim().to_owned();
        if normalized_name.is_empty() || normalized_uri.is_empty() {
            return Err(ToolGroupDomainError::IncompleteResourceTemplate(
                normalized_name,
            ));
        }

        Ok(Self {
            name: normalized_name,
            uri_template: normalized_uri,
            upstream_path: None,
        })
    }

    /// Sets the remote API path the resource reads from.
    #[must_use]
    pub fn with_upstream_path(mut self, path: impl Into<String>) -> Self {
        self.upstream_path = Some(path.into());
        self
    }

    /// Returns the resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URI template, for example `projects://{projectId}`.
    #[must_use]
    pub fn uri_template(&self) -> &str {
        &self.uri_template
    }

    /// Returns the remote API path template, when the resource has one.
    #[must_use]
    pub fn upstream_path(&self) -> Option<&str> {
        self.upstream_path.as_deref()
    }
}
