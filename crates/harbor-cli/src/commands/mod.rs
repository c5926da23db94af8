//! CLI command implementations

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use harbor_core::{HarborConfig, HarborResult};
use harbor_node::{CommandEnv, Node};
use harbor_provider::NoopRouting;

pub mod node;
pub mod provide;
pub mod stats;

// Export command functions with clear names
pub use node::execute as execute_node;
pub use provide::execute as execute_provide;
pub use stats::execute as execute_stats_provide;

/// Node attached to a command environment, plus the handles needed to
/// shut its worker down
pub(crate) struct AttachedNode {
    pub env: CommandEnv,
    pub node: Arc<Node>,
    pub cancel: CancellationToken,
    pub worker: Option<JoinHandle<()>>,
}

impl AttachedNode {
    /// Stop the batched worker, letting it flush queued announcements
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker {
            let _ = worker.await;
        }
    }
}

/// Build the node from config and bind it to a fresh command environment.
///
/// Commands construct their node in-process per invocation; there is no
/// long-lived daemon to dial. The routing seam is the no-op backend until
/// a real network client is wired in.
pub(crate) fn attach_node(config: &HarborConfig) -> HarborResult<AttachedNode> {
    config.validate()?;

    let cancel = CancellationToken::new();
    let (node, worker) = Node::from_config(config, Arc::new(NoopRouting), cancel.clone());
    let node = Arc::new(node);

    Ok(AttachedNode {
        env: CommandEnv::with_node(Arc::clone(&node)),
        node,
        cancel,
        worker,
    })
}
