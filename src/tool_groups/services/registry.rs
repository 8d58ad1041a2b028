//! Static table of loadable tool groups.

use crate::tool_groups::{domain::GroupName, ports::GroupLoader};
use std::fmt;
use std::sync::Arc;

/// Maps group names to the loaders that register them.
///
/// Entries keep insertion order. Registering a name twice replaces the
/// earlier loader in place.
#[derive(Clone, Default)]
pub struct GroupRegistry {
    entries: Vec<(GroupName, Arc<dyn GroupLoader>)>,
}

impl GroupRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from `(name, loader)` pairs.
    #[must_use]
    pub fn from_groups(groups: impl IntoIterator<Item = (GroupName, Arc<dyn GroupLoader>)>) -> Self {
        groups
            .into_iter()
            .fold(Self::new(), |registry, (name, loader)| {
                registry.with_group(name, loader)
            })
    }

    /// Adds or replaces a group.
    #[must_use]
    pub fn with_group(mut self, name: GroupName, loader: Arc<dyn GroupLoader>) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = loader,
            None => self.entries.push((name, loader)),
        }
        self
    }

    /// Returns the loader registered for `name`.
    #[must_use]
    pub fn resolve(&self, name: &GroupName) -> Option<Arc<dyn GroupLoader>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, loader)| Arc::clone(loader))
    }

    /// Returns whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &GroupName) -> bool {
        self.entries.iter().any(|(existing, _)| existing == name)
    }

    /// Returns the registered group names in insertion order.
    #[must_use]
    pub fn group_names(&self) -> Vec<GroupName> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl fmt::Debug for GroupRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GroupRegistry")
            .field("groups", &self.group_names())
            .finish()
    }
}
