use std::sync::Arc;

use crate::error::{NodeError, NodeResult};
use crate::node::Node;

/// Execution environment handed to commands.
///
/// Carries the node handle explicitly so the query path stays testable
/// with a fabricated node; there is no process-wide lookup.
#[derive(Debug, Clone, Default)]
pub struct CommandEnv {
    node: Option<Arc<Node>>,
}

impl CommandEnv {
    /// Environment with no node attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment bound to `node`
    pub fn with_node(node: Arc<Node>) -> Self {
        Self { node: Some(node) }
    }

    /// Resolve the running node, or fail if none is attached
    pub fn node(&self) -> NodeResult<&Arc<Node>> {
        self.node.as_ref().ok_or(NodeError::Unavailable)
    }
}
