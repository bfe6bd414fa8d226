use anyhow::Result;
use futures::stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::app::hub::Hub;

/// Forwards every payload from `source` to the hub, verbatim and in source
/// order. Returns when the source ends; a source error ends the relay.
pub async fn run<S>(source: S, hub: Hub) -> Result<()>
where
    S: Stream<Item = Result<String>>,
{
    info!("relay started");
    futures::pin_mut!(source);

    while let Some(item) = source.next().await {
        let payload = item?;
        let delivered = hub.publish(payload.as_str());
        info!(payload = %payload, delivered, "notification relayed");
    }

    warn!("notification source closed, relay stopping");
    Ok(())
}
