//! Port contracts consumed by tool group activation.

mod host;
mod loader;

pub use host::{ToolHost, ToolHostError, ToolHostResult};
pub use loader::{GroupLoader, GroupLoaderError, GroupLoaderResult};
