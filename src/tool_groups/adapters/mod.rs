//! Adapter implementations for the tool group ports.

pub mod catalog;

#[cfg(any(test, feature = "test-support"))]
mod clock;
mod resources;
mod runtime;

#[cfg(any(test, feature = "test-support"))]
pub use clock::ManualClock;
pub use resources::default_resources;
pub use runtime::InMemoryToolHost;
