use std::io;

use tracing::debug;

use harbor_core::{HarborConfig, HarborError, HarborResult};
use harbor_node::provide_stats;
use harbor_provider::StatContext;

use crate::output;
use crate::Encoding;

/// Execute the `stats provide` command
pub async fn execute(config: &HarborConfig, encoding: Encoding) -> HarborResult<()> {
    debug!("querying provider statistics");

    let attached = super::attach_node(config)?;
    let ctx = StatContext::background();
    let result = provide_stats(&attached.env, &ctx).await;
    attached.shutdown().await;

    let stats = result.map_err(HarborError::from)?;

    let mut stdout = io::stdout().lock();
    match encoding {
        Encoding::Text => output::render_provide_stats(&mut stdout, &stats)?,
        Encoding::Json => output::render_provide_stats_json(&mut stdout, &stats)?,
    }

    Ok(())
}
