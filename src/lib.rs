//! Toolshed: bounded, on-demand activation of tool groups.
//!
//! A host surface advertises operations to a client. Operations come in named
//! groups that are registered lazily, either by explicit request or from a
//! keyword classification of the client's query. At most a fixed number of
//! groups are tracked as active; loading one more evicts the least recently
//! used.
//!
//! # Architecture
//!
//! Toolshed follows hexagonal architecture principles:
//!
//! - **Domain**: Group identity, usage bookkeeping, eviction and
//!   classification, with no I/O
//! - **Ports**: The host registration surface and group loaders
//! - **Adapters**: In-memory host, static operation catalogs, resources
//! - **Services**: Registry, active set, lifecycle manager and start-up
//!
//! # Modules
//!
//! - [`tool_groups`]: Group activation lifecycle
//! - [`config`]: Layered runtime settings
//! - [`logging`]: Tracing subscriber set-up

pub mod config;
pub mod logging;
pub mod tool_groups;
