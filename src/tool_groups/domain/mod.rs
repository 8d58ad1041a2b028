//! Domain model for tool group activation.
//!
//! Groups are static, named bundles of operations. The domain models group
//! identity, the operations and resources registered on the host surface,
//! per-group usage bookkeeping, least-recently-used victim selection and the
//! query classifier. Everything here is synchronous and free of I/O.

mod classifier;
mod error;
mod eviction;
mod ids;
mod operation;
mod resource;
mod usage;

pub use classifier::{
    ClassifierRules, DEFAULT_CLASSIFIER_RULES, FallbackRule, KeywordRule, QueryClassifier,
};
pub use error::ToolGroupDomainError;
pub use eviction::select_victim;
pub use ids::{GroupName, OperationId};
pub use operation::OperationDefinition;
pub use resource::ResourceTemplate;
pub use usage::{DEFAULT_GROUP_CAPACITY, GroupCapacity, GroupUsage};
