use tracing::debug;

use harbor_provider::{Provider, ProviderStats, StatContext};

use crate::env::CommandEnv;
use crate::error::{NodeError, NodeResult};

/// Fetch a snapshot of the batched provider's statistics.
///
/// Four preconditions gate the fetch, in order: a node must be attached to
/// the environment, it must be online, its provider must be the batched
/// variant, and the stats call itself must succeed. The online guard runs
/// before any provider access, and `stat` is never invoked on a
/// non-batched provider. Failures surface immediately; nothing is retried
/// or defaulted at this layer.
pub async fn provide_stats(env: &CommandEnv, ctx: &StatContext) -> NodeResult<ProviderStats> {
    let node = env.node()?;
    node.require_online()?;

    let batched = match node.provider() {
        Provider::Batched(provider) => provider,
        Provider::Simple(_) => return Err(NodeError::UnsupportedProvider),
    };

    debug!(node = node.name(), "fetching provider stats");
    batched.stat(ctx).await.map_err(NodeError::StatsFetch)
}
