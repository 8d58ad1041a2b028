//! Facade coordinating group activation, eviction and query preloading.

use super::{
    ActiveGroupSet, GroupLoadError, GroupLoadResult, GroupRegistry, LoadOutcome, LoadStep,
};
use crate::tool_groups::{
    domain::{GroupCapacity, GroupName, OperationId, QueryClassifier},
    ports::ToolHost,
};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Result of classifying a query and preloading its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadOutcome {
    /// The query matched no group.
    NoMatch,
    /// The suggested group was loaded.
    Loaded(GroupName),
    /// The suggested group was already active and has been touched.
    Refreshed(GroupName),
    /// The suggested group failed to load; the failure has been logged.
    Failed(GroupName),
}

/// Owns the active group set and mediates every change to it.
///
/// Loads queue on a gate, so the decision to evict, the loader call and the
/// final insert of one load never interleave with another load. The set
/// itself sits behind a separate lock that is never held across a loader
/// await; reads and unloads proceed while a loader runs. Unloading only
/// drops bookkeeping; operations already registered on the host remain
/// callable.
pub struct GroupLifecycleManager<H, C>
where
    H: ToolHost,
    C: Clock + Send + Sync,
{
    registry: Arc<GroupRegistry>,
    host: Arc<H>,
    clock: Arc<C>,
    classifier: QueryClassifier,
    load_gate: Mutex<()>,
    active: Mutex<ActiveGroupSet>,
}

impl<H, C> GroupLifecycleManager<H, C>
where
    H: ToolHost,
    C: Clock + Send + Sync,
{
    /// Creates a manager with no active groups.
    #[must_use]
    pub fn new(
        registry: Arc<GroupRegistry>,
        host: Arc<H>,
        clock: Arc<C>,
        capacity: GroupCapacity,
    ) -> Self {
        Self {
            registry,
            host,
            clock,
            classifier: QueryClassifier::default(),
            load_gate: Mutex::new(()),
            active: Mutex::new(ActiveGroupSet::new(capacity)),
        }
    }

    /// Replaces the query classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: QueryClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Returns the host the manager registers on.
    #[must_use]
    pub const fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Loads a group, or touches it if already active.
    ///
    /// Success and failure are logged here. A failure leaves the manager
    /// usable with whatever groups remain active; callers decide whether it
    /// matters.
    ///
    /// # Errors
    ///
    /// Returns [`GroupLoadError`] when the name is invalid or unknown, or
    /// when the group's loader fails.
    pub async fn load_group(&self, name: &str) -> GroupLoadResult<LoadOutcome> {
        let result = self.load_validated(name).await;
        match &result {
            Ok(LoadOutcome::Refreshed) => {
                debug!(group = name, "tool group already active");
            }
            Ok(LoadOutcome::Loaded {
                operation_ids,
                evicted,
            }) => {
                info!(
                    group = name,
                    operations = operation_ids.len(),
                    evicted = evicted.as_ref().map(GroupName::as_str),
                    "loaded tool group"
                );
            }
            Err(err) => {
                warn!(group = name, error = %err, "failed to load tool group");
            }
        }
        result
    }

    async fn load_validated(&self, name: &str) -> GroupLoadResult<LoadOutcome> {
        let group = GroupName::new(name)?;
        let _serialized = self.load_gate.lock().await;
        let step = self
            .active
            .lock()
            .await
            .begin_load(&group, &self.registry, &*self.clock)?;
        let pending = match step {
            LoadStep::Refreshed => return Ok(LoadOutcome::Refreshed),
            LoadStep::Pending(pending) => pending,
        };
        let operation_ids = pending.register(&*self.host).await?;
        Ok(self
            .active
            .lock()
            .await
            .complete_load(pending, operation_ids, &*self.clock))
    }

    /// Drops a group's bookkeeping.
    ///
    /// Returns whether the group was active. Invalid or inactive names are a
    /// no-op.
    pub async fn unload_group(&self, name: &str) -> bool {
        let Ok(group) = GroupName::new(name) else {
            debug!(group = name, "ignoring unload of invalid group name");
            return false;
        };
        let removed = self.active.lock().await.unload(&group).is_some();
        if removed {
            info!(group = %group, "unloaded tool group");
        }
        removed
    }

    /// Returns the active group names in load order.
    pub async fn get_active_groups(&self) -> Vec<GroupName> {
        self.active.lock().await.snapshot()
    }

    /// Returns the operations recorded for an active group.
    pub async fn active_operations(&self, name: &str) -> Option<Vec<OperationId>> {
        let group = GroupName::new(name).ok()?;
        self.active
            .lock()
            .await
            .usage(&group)
            .map(|usage| usage.operation_ids().to_vec())
    }

    /// Returns every group the registry can load.
    #[must_use]
    pub fn available_groups(&self) -> Vec<GroupName> {
        self.registry.group_names()
    }

    /// Classifies `query` without loading anything.
    #[must_use]
    pub fn classify(&self, query: &str) -> Option<&'static str> {
        self.classifier.classify(query)
    }

    /// Classifies `query` and loads the suggested group.
    ///
    /// Never fails: a load failure is logged and reported as
    /// [`PreloadOutcome::Failed`].
    pub async fn suggest_and_load_groups(&self, query: &str) -> PreloadOutcome {
        let Some(suggested) = self.classify(query) else {
            debug!(query, "query matched no tool group");
            return PreloadOutcome::NoMatch;
        };
        debug!(query, group = suggested, "query suggests tool group");

        let result = self.load_group(suggested).await;
        let Ok(group) = GroupName::new(suggested) else {
            return PreloadOutcome::NoMatch;
        };
        match result {
            Ok(LoadOutcome::Refreshed) => PreloadOutcome::Refreshed(group),
            Ok(LoadOutcome::Loaded { .. }) => PreloadOutcome::Loaded(group),
            Err(GroupLoadError::InvalidGroupName(_)) => PreloadOutcome::NoMatch,
            Err(_) => PreloadOutcome::Failed(group),
        }
    }
}
