//! Bounded, on-demand activation of tool groups.
//!
//! A host surface advertises operations to a client. Groups of operations are
//! registered lazily, either explicitly or from a keyword classification of
//! the client's query, and at most a fixed number of groups are tracked as
//! active at once.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
