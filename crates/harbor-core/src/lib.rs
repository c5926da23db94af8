//! Core types for the Harbor content-providing node.
//!
//! This crate provides the error taxonomy, configuration, and content-key
//! types shared across the Harbor workspace.

pub mod config;
pub mod error;
pub mod key;
pub mod types;

// Re-export commonly used types
pub use crate::config::{HarborConfig, NetworkConfig, ProviderConfig, ProviderMode};
pub use crate::error::{HarborError, HarborResult};
pub use crate::key::ContentKey;
