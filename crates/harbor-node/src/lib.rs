//! Node runtime for the Harbor content-providing system.
//!
//! A [`Node`] owns an online flag and a configured provider variant.
//! Commands reach it through a [`CommandEnv`] and query its batched
//! provider statistics via [`provide_stats`].

pub mod env;
pub mod error;
pub mod node;
pub mod query;

// Re-export commonly used types
pub use env::CommandEnv;
pub use error::{NodeError, NodeResult};
pub use node::{Node, NodeBuilder};
pub use query::provide_stats;
