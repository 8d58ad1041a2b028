//! Orchestration services for tool group activation.
//!
//! The registry maps names to loaders, the active set enforces capacity and
//! least-recently-used eviction, and the lifecycle manager queues loads on a
//! gate without blocking readers. `bootstrap` runs the start-up sequence.

mod active_set;
mod bootstrap;
mod lifecycle;
mod registry;

pub use active_set::{
    ActiveGroupSet, GroupLoadError, GroupLoadResult, LoadOutcome, LoadStep, PendingLoad,
};
pub use bootstrap::{BootstrapError, bootstrap};
pub use lifecycle::{GroupLifecycleManager, PreloadOutcome};
pub use registry::GroupRegistry;
