//! Bounded set of active tool groups.

use super::GroupRegistry;
use crate::tool_groups::{
    domain::{
        GroupCapacity, GroupName, GroupUsage, OperationId, ToolGroupDomainError, select_victim,
    },
    ports::{GroupLoader, GroupLoaderError, ToolHost},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors surfaced when a group cannot be loaded.
#[derive(Debug, Error)]
pub enum GroupLoadError {
    /// The requested name is not a valid group name.
    #[error(transparent)]
    InvalidGroupName(#[from] ToolGroupDomainError),

    /// No loader is registered under the requested name.
    #[error("unknown tool group: {0}")]
    UnknownGroup(GroupName),

    /// The group's loader failed.
    #[error("tool group {group} failed to load: {source}")]
    Loader {
        /// Group whose loader failed.
        group: GroupName,
        /// Loader failure.
        #[source]
        source: GroupLoaderError,
    },
}

/// Result type for group load operations.
pub type GroupLoadResult<T> = Result<T, GroupLoadError>;

/// What a successful load did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The group was already active; only its usage timestamp moved.
    Refreshed,
    /// The group's loader ran and the group became active.
    Loaded {
        /// Operations reported by the loader.
        operation_ids: Vec<OperationId>,
        /// Group dropped from the set to make room, if any.
        evicted: Option<GroupName>,
    },
}

/// First step of a load, decided under the set's lock.
pub enum LoadStep {
    /// The group was already active and has been touched.
    Refreshed,
    /// A slot is reserved; the loader still has to run.
    Pending(PendingLoad),
}

/// A load that has reserved its slot and is waiting on its loader.
pub struct PendingLoad {
    group: GroupName,
    loader: Arc<dyn GroupLoader>,
    evicted: Option<GroupName>,
}

impl PendingLoad {
    /// Returns the group being loaded.
    #[must_use]
    pub const fn group(&self) -> &GroupName {
        &self.group
    }

    /// Returns the group evicted to make room, if any.
    #[must_use]
    pub const fn evicted(&self) -> Option<&GroupName> {
        self.evicted.as_ref()
    }

    /// Runs the group's loader against `host`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupLoadError::Loader`] when the loader fails.
    pub async fn register(&self, host: &dyn ToolHost) -> GroupLoadResult<Vec<OperationId>> {
        self.loader
            .register(host)
            .await
            .map_err(|source| GroupLoadError::Loader {
                group: self.group.clone(),
                source,
            })
    }
}

/// Active groups with their usage, bounded by a capacity.
///
/// Entries keep insertion order so least-recently-used ties resolve to the
/// group loaded first. The number of entries never exceeds the capacity.
#[derive(Debug, Clone, Default)]
pub struct ActiveGroupSet {
    capacity: GroupCapacity,
    entries: Vec<(GroupName, GroupUsage)>,
}

impl ActiveGroupSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new(capacity: GroupCapacity) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Returns the capacity.
    #[must_use]
    pub const fn capacity(&self) -> GroupCapacity {
        self.capacity
    }

    /// Returns the number of active groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no group is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether `name` is active.
    #[must_use]
    pub fn is_active(&self, name: &GroupName) -> bool {
        self.usage(name).is_some()
    }

    /// Returns the usage recorded for an active group.
    #[must_use]
    pub fn usage(&self, name: &GroupName) -> Option<&GroupUsage> {
        self.entries
            .iter()
            .find(|(active, _)| active == name)
            .map(|(_, usage)| usage)
    }

    /// Marks an active group as used now.
    ///
    /// Returns `false`, changing nothing, when the group is not active.
    pub fn touch(&mut self, name: &GroupName, clock: &impl Clock) -> bool {
        self.entries
            .iter_mut()
            .find(|(active, _)| active == name)
            .map(|(_, usage)| usage.touch(clock))
            .is_some()
    }

    /// Loads `name` through its registered loader.
    ///
    /// An already active group is only touched. Otherwise, when the set is
    /// full, the least-recently-used group is dropped before the loader
    /// runs. A failed load does not restore the dropped group.
    ///
    /// This holds `&mut self` across the loader call. Callers sharing the set
    /// should use [`ActiveGroupSet::begin_load`] and
    /// [`ActiveGroupSet::complete_load`] so the set is not locked while the
    /// loader runs.
    ///
    /// # Errors
    ///
    /// Returns [`GroupLoadError::UnknownGroup`] when the registry has no
    /// loader for `name`, or [`GroupLoadError::Loader`] when the loader
    /// fails. Neither inserts the group.
    pub async fn load<C>(
        &mut self,
        name: &GroupName,
        registry: &GroupRegistry,
        host: &dyn ToolHost,
        clock: &C,
    ) -> GroupLoadResult<LoadOutcome>
    where
        C: Clock + Sync,
    {
        let pending = match self.begin_load(name, registry, clock)? {
            LoadStep::Refreshed => return Ok(LoadOutcome::Refreshed),
            LoadStep::Pending(pending) => pending,
        };
        let operation_ids = pending.register(host).await?;
        Ok(self.complete_load(pending, operation_ids, clock))
    }

    /// Runs the bookkeeping half of a load that precedes the loader call.
    ///
    /// Touches `name` if it is active. Otherwise frees a slot when the set is
    /// full and resolves the loader. The eviction stands even when the name
    /// turns out to be unknown.
    ///
    /// # Errors
    ///
    /// Returns [`GroupLoadError::UnknownGroup`] when the registry has no
    /// loader for `name`.
    pub fn begin_load(
        &mut self,
        name: &GroupName,
        registry: &GroupRegistry,
        clock: &impl Clock,
    ) -> GroupLoadResult<LoadStep> {
        if self.touch(name, clock) {
            return Ok(LoadStep::Refreshed);
        }

        let evicted = self.reserve_slot();

        let loader = registry
            .resolve(name)
            .ok_or_else(|| GroupLoadError::UnknownGroup(name.clone()))?;
        Ok(LoadStep::Pending(PendingLoad {
            group: name.clone(),
            loader,
            evicted,
        }))
    }

    /// Records a group whose loader succeeded.
    ///
    /// If the group became active in the meantime it is only touched, and
    /// if the set filled up in the meantime another victim is evicted, so
    /// the capacity bound holds either way.
    pub fn complete_load(
        &mut self,
        pending: PendingLoad,
        operation_ids: Vec<OperationId>,
        clock: &impl Clock,
    ) -> LoadOutcome {
        let PendingLoad {
            group, evicted, ..
        } = pending;
        if self.touch(&group, clock) {
            return LoadOutcome::Loaded {
                operation_ids,
                evicted,
            };
        }
        let late_victim = self.reserve_slot();
        self.entries
            .push((group, GroupUsage::new(operation_ids.clone(), clock)));
        LoadOutcome::Loaded {
            operation_ids,
            evicted: evicted.or(late_victim),
        }
    }

    /// Drops the bookkeeping for `name`.
    ///
    /// Operations the group registered stay on the host. Returns the removed
    /// usage, or `None` when the group was not active.
    pub fn unload(&mut self, name: &GroupName) -> Option<GroupUsage> {
        let position = self.entries.iter().position(|(active, _)| active == name)?;
        let (_, usage) = self.entries.remove(position);
        Some(usage)
    }

    /// Returns the active group names in load order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<GroupName> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Frees one slot when the set is full.
    fn reserve_slot(&mut self) -> Option<GroupName> {
        if self.entries.len() < self.capacity.get() {
            return None;
        }
        let victim = select_victim(&self.entries).clone();
        self.unload(&victim)?;
        info!(group = %victim, "evicted least recently used tool group");
        Some(victim)
    }
}
