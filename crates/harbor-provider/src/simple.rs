use std::fmt;
use std::sync::Arc;

use tracing::debug;

use harbor_core::ContentKey;

use crate::error::ProviderResult;
use crate::routing::ContentRouting;

/// Provider that announces keys one at a time as they arrive.
///
/// Keeps no state and exposes no stats surface.
#[derive(Clone)]
pub struct SimpleProvider {
    routing: Arc<dyn ContentRouting>,
}

impl SimpleProvider {
    pub fn new(routing: Arc<dyn ContentRouting>) -> Self {
        Self { routing }
    }

    /// Announce `key` immediately
    pub async fn provide(&self, key: &ContentKey) -> ProviderResult<()> {
        debug!(%key, "announcing key");
        self.routing.provide(key).await
    }
}

impl fmt::Debug for SimpleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleProvider").finish_non_exhaustive()
    }
}
