//! Usage bookkeeping for active tool groups.

use super::{OperationId, ToolGroupDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Default number of groups that may be active at once.
pub const DEFAULT_GROUP_CAPACITY: usize = 2;

/// Usage metadata recorded for one active group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUsage {
    last_used_at: DateTime<Utc>,
    operation_ids: Vec<OperationId>,
}

impl GroupUsage {
    /// Records a freshly loaded group.
    #[must_use]
    pub fn new(operation_ids: Vec<OperationId>, clock: &impl Clock) -> Self {
        Self {
            last_used_at: clock.utc(),
            operation_ids,
        }
    }

    /// Marks the group as used now.
    ///
    /// The timestamp never moves backwards, even if the clock does.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.last_used_at = self.last_used_at.max(clock.utc());
    }

    /// Returns when the group was last loaded or touched.
    #[must_use]
    pub const fn last_used_at(&self) -> DateTime<Utc> {
        self.last_used_at
    }

    /// Returns the operations the group's loader reported.
    #[must_use]
    pub fn operation_ids(&self) -> &[OperationId] {
        &self.operation_ids
    }
}

/// Maximum number of concurrently active groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GroupCapacity(NonZeroUsize);

impl GroupCapacity {
    /// Creates a capacity that admits at least one group.
    ///
    /// # Errors
    ///
    /// Returns [`ToolGroupDomainError::ZeroCapacity`] for zero.
    pub fn new(value: usize) -> Result<Self, ToolGroupDomainError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(ToolGroupDomainError::ZeroCapacity)
    }

    /// Returns the capacity as a plain count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for GroupCapacity {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_GROUP_CAPACITY - 1))
    }
}

impl TryFrom<usize> for GroupCapacity {
    type Error = ToolGroupDomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupCapacity> for usize {
    fn from(capacity: GroupCapacity) -> Self {
        capacity.get()
    }
}
