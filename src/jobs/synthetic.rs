use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;
use uuid::Uuid;

use crate::app::notifications::NotificationPanel;
use crate::domain::notification::{Notification, NotificationKind};

/// Periodic generator of simulated panel notifications.
///
/// The task lives exactly as long as this handle: `stop` or drop cancels it.
pub struct SyntheticFeed {
    task: Option<JoinHandle<()>>,
}

impl SyntheticFeed {
    /// `probability` must lie in `0.0..=1.0`.
    pub fn start(
        panel: Arc<RwLock<NotificationPanel>>,
        period: Duration,
        probability: f64,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let generated = {
                    let mut rng = rand::thread_rng();
                    maybe_synthesize(&mut rng, probability, OffsetDateTime::now_utc())
                };
                if let Some(notification) = generated {
                    debug!(id = %notification.id, "synthetic notification generated");
                    panel.write().push(notification);
                }
            }
        });

        Self { task: Some(task) }
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }
}

impl Drop for SyntheticFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One tick of the simulation.
pub fn maybe_synthesize<R: Rng>(
    rng: &mut R,
    probability: f64,
    now: OffsetDateTime,
) -> Option<Notification> {
    if !rng.gen_bool(probability) {
        return None;
    }

    let kind = if rng.gen_bool(0.5) {
        NotificationKind::Info
    } else {
        NotificationKind::Warning
    };

    Some(Notification {
        id: format!("notif-{}", Uuid::new_v4().simple()),
        kind,
        title: "System Update".to_string(),
        message: "Database sync completed successfully".to_string(),
        timestamp: now,
        read: false,
    })
}
