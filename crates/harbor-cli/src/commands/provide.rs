use tracing::info;

use harbor_core::{ContentKey, HarborConfig, HarborError, HarborResult};

/// Execute the provide command: announce a single key and exit
pub async fn execute(key: String, config: &HarborConfig) -> HarborResult<()> {
    let key: ContentKey = key.parse()?;

    let attached = super::attach_node(config)?;
    let result = announce(&attached, key).await;
    // Worker drains the queue before stopping, so the announcement is
    // flushed even on this short-lived path.
    attached.shutdown().await;
    result
}

async fn announce(
    attached: &super::AttachedNode,
    key: ContentKey,
) -> HarborResult<()> {
    attached.node.require_online().map_err(HarborError::from)?;
    attached
        .node
        .provider()
        .provide(key.clone())
        .await
        .map_err(HarborError::from)?;
    info!(%key, "announcement queued");
    Ok(())
}
