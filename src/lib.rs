//! Harbor content-providing node.
//!
//! This crate ties together the Harbor workspace: a node runtime that
//! announces content it holds to a routing network, with an optional
//! batched announcement engine and a CLI for querying its statistics.

pub use harbor_core as core;
pub use harbor_node as node;
pub use harbor_provider as provider;

/// Version of the Harbor system
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
