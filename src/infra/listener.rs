use anyhow::{anyhow, Result};
use futures::stream::{Stream, StreamExt};
use sqlx::postgres::PgListener;
use tracing::info;

use crate::infra::db::Db;

/// A dedicated connection subscribed to one `LISTEN` channel.
pub struct ChannelListener {
    listener: PgListener,
}

impl ChannelListener {
    pub async fn connect(db: &Db, channel: &str) -> Result<Self> {
        let mut listener = PgListener::connect_with(db.pool()).await?;
        listener
            .listen(channel)
            .await
            .map_err(|err| anyhow!("failed to LISTEN on {}: {}", channel, err))?;
        info!(channel = %channel, "listening for notifications");
        Ok(Self { listener })
    }

    /// Payloads in delivery order. An item is an error when the connection
    /// fails and cannot be re-established.
    pub fn into_payloads(self) -> impl Stream<Item = Result<String>> + Send + 'static {
        self.listener.into_stream().map(|item| {
            item.map(|notification| notification.payload().to_string())
                .map_err(anyhow::Error::from)
        })
    }
}
