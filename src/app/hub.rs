use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::domain::event::RelayEvent;

/// Fan-out point between the channel listener and connected sockets.
///
/// Every subscriber owns a receiver of one bounded broadcast channel, so a
/// publish reaches exactly the subscribers that exist at that moment.
#[derive(Clone)]
pub struct Hub {
    tx: broadcast::Sender<RelayEvent>,
    connections: Arc<AtomicUsize>,
}

impl Hub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Emits `payload` under the `db_update` event. Returns how many
    /// subscribers it was queued for; zero subscribers is not an error.
    pub fn publish(&self, payload: impl Into<String>) -> usize {
        match self.tx.send(RelayEvent::db_update(payload)) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!("no connected clients, payload dropped");
                0
            }
        }
    }

    pub fn subscribe(&self) -> Subscription {
        let count = self.connections.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(connections = count, "client subscribed");
        Subscription {
            rx: self.tx.subscribe(),
            connections: Arc::clone(&self.connections),
        }
    }

    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

/// One registered connection. Dropping it deregisters the connection.
pub struct Subscription {
    rx: broadcast::Receiver<RelayEvent>,
    connections: Arc<AtomicUsize>,
}

impl Subscription {
    /// Next event, or `None` once the hub is gone. Events this subscriber
    /// fell too far behind on are skipped.
    pub async fn recv(&mut self) -> Option<RelayEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "client lagged behind, events skipped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let remaining = self.connections.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!(connections = remaining, "client unsubscribed");
    }
}
