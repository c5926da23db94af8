use tracing::info;

use harbor_core::{HarborConfig, HarborError, HarborResult};

/// Execute the node command: run the node in the foreground until ctrl-c
pub async fn execute(config: &HarborConfig) -> HarborResult<()> {
    let attached = super::attach_node(config)?;
    attached.node.require_online().map_err(HarborError::from)?;

    for key in &config.roots {
        attached
            .node
            .provider()
            .provide(key.clone())
            .await
            .map_err(HarborError::from)?;
    }
    info!(
        node = attached.node.name(),
        roots = config.roots.len(),
        "node running, press ctrl-c to stop"
    );

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    attached.shutdown().await;

    Ok(())
}
