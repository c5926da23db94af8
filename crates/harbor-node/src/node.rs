use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use harbor_core::{HarborConfig, ProviderMode};
use harbor_provider::{
    BatchedConfig, BatchedProvider, ContentRouting, Provider, SimpleProvider,
};

use crate::error::{NodeError, NodeResult};

/// Handle to a running Harbor node.
///
/// Owns the online flag and the configured provider variant. Handles are
/// shared read-only across commands; nothing on this type mutates after
/// construction.
#[derive(Debug)]
pub struct Node {
    name: String,
    online: bool,
    provider: Provider,
}

impl Node {
    pub fn builder(name: impl Into<String>) -> NodeBuilder {
        NodeBuilder::new(name)
    }

    /// Build a node from configuration with an injected routing backend.
    ///
    /// Returns the node plus the batched worker's join handle when the
    /// batched mode is configured; cancelling `cancel` stops that worker.
    pub fn from_config(
        config: &HarborConfig,
        routing: Arc<dyn ContentRouting>,
        cancel: CancellationToken,
    ) -> (Self, Option<JoinHandle<()>>) {
        let (provider, worker) = match config.provider.mode {
            ProviderMode::Simple => (Provider::Simple(SimpleProvider::new(routing)), None),
            ProviderMode::Batched => {
                let (provider, handle) = BatchedProvider::spawn(
                    BatchedConfig::from(&config.provider),
                    routing,
                    cancel,
                );
                (Provider::Batched(provider), Some(handle))
            }
        };

        info!(
            name = %config.name,
            online = config.network.online,
            provider = provider.kind(),
            "node constructed"
        );

        let node = Self {
            name: config.name.clone(),
            online: config.network.online,
            provider,
        };
        (node, worker)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Fail with [`NodeError::Offline`] unless the node is networked
    pub fn require_online(&self) -> NodeResult<()> {
        if self.online {
            Ok(())
        } else {
            Err(NodeError::Offline)
        }
    }
}

/// Builder for fabricating nodes directly, used by tests and embedders
#[derive(Debug)]
pub struct NodeBuilder {
    name: String,
    online: bool,
    provider: Option<Provider>,
}

impl NodeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            online: true,
            provider: None,
        }
    }

    pub fn online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Finish the node. A builder without a provider gets the simple
    /// variant wired to a no-op routing backend.
    pub fn build(self) -> Node {
        let provider = self.provider.unwrap_or_else(|| {
            Provider::Simple(SimpleProvider::new(Arc::new(
                harbor_provider::NoopRouting,
            )))
        });
        Node {
            name: self.name,
            online: self.online,
            provider,
        }
    }
}
