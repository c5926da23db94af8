//! Content provider subsystem for the Harbor node.
//!
//! A node announces the content it holds through one of two provider
//! variants: a simple provider that announces keys as they arrive, and a
//! batched provider that groups announcements, periodically re-announces
//! everything it tracks, and keeps statistics about that activity.

pub mod batched;
pub mod context;
pub mod error;
pub mod routing;
pub mod simple;
pub mod stats;

// Re-export commonly used types
pub use batched::{BatchedConfig, BatchedProvider};
pub use context::StatContext;
pub use error::{ProviderError, ProviderResult};
pub use routing::{ContentRouting, NoopRouting};
pub use simple::SimpleProvider;
pub use stats::ProviderStats;

use harbor_core::ContentKey;

/// Provider variants a node can be configured with.
///
/// The stats surface exists only on the batched variant; callers that need
/// it must match explicitly rather than fall back to a degraded output.
pub enum Provider {
    Simple(SimpleProvider),
    Batched(BatchedProvider),
}

impl Provider {
    /// Variant name for logs and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Provider::Simple(_) => "simple",
            Provider::Batched(_) => "batched",
        }
    }

    /// Type guard for the batched variant
    pub fn as_batched(&self) -> Option<&BatchedProvider> {
        match self {
            Provider::Batched(provider) => Some(provider),
            Provider::Simple(_) => None,
        }
    }

    /// Announce a key through whichever variant is configured
    pub async fn provide(&self, key: ContentKey) -> ProviderResult<()> {
        match self {
            Provider::Simple(provider) => provider.provide(&key).await,
            Provider::Batched(provider) => provider.enqueue_provide(key).await,
        }
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Provider").field(&self.kind()).finish()
    }
}
