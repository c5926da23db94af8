use async_trait::async_trait;

use harbor_core::ContentKey;

use crate::error::ProviderResult;

/// Boundary to the distributed lookup system that records who holds what.
///
/// Harbor itself ships no routing implementation; nodes are wired with a
/// backend at construction time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRouting: Send + Sync + 'static {
    /// Announce that this node can serve `key`
    async fn provide(&self, key: &ContentKey) -> ProviderResult<()>;
}

/// Routing backend that accepts and drops every announcement.
///
/// Used when a node runs without a network backend attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRouting;

#[async_trait]
impl ContentRouting for NoopRouting {
    async fn provide(&self, _key: &ContentKey) -> ProviderResult<()> {
        Ok(())
    }
}
