use anyhow::{anyhow, Result};
use futures::StreamExt;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::domain::event::RelayEvent;

pub const NOTIFICATION_TITLE: &str = "New DB Row";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Default,
    Granted,
    Denied,
}

/// Where the client raises desktop notifications.
pub trait DesktopNotifier: Send + Sync + 'static {
    fn permission(&self) -> Permission;

    /// Asks the user once; returns the resulting permission.
    fn request_permission(&self) -> Permission;

    fn show(&self, title: &str, body: &str);
}

/// Notifier for headless sessions: always granted, writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl DesktopNotifier for TracingNotifier {
    fn permission(&self) -> Permission {
        Permission::Granted
    }

    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn show(&self, title: &str, body: &str) {
        info!(title = %title, body = %body, "desktop notification");
    }
}

/// Append-only record of every payload received this session.
#[derive(Debug, Clone, Default)]
pub struct UpdateLog {
    entries: Arc<RwLock<Vec<String>>>,
}

impl UpdateLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, payload: String) {
        self.entries.write().push(payload);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Applies one text frame from the relay. Returns true when it was a
/// `db_update` event and got recorded.
pub fn handle_frame(text: &str, log: &UpdateLog, notifier: &dyn DesktopNotifier) -> bool {
    let event: RelayEvent = match serde_json::from_str(text) {
        Ok(event) => event,
        Err(err) => {
            debug!(error = ?err, "ignoring malformed frame");
            return false;
        }
    };
    if !event.is_db_update() {
        debug!(event = %event.event, "ignoring unknown event");
        return false;
    }

    info!(payload = %event.payload, "update received");
    if notifier.permission() == Permission::Granted {
        notifier.show(NOTIFICATION_TITLE, &event.payload);
    }
    log.append(event.payload);
    true
}

/// One dashboard session connected to the relay.
pub struct ClientShell {
    log: UpdateLog,
    task: Option<JoinHandle<()>>,
}

impl ClientShell {
    /// Connects to `url` and starts handling `db_update` events.
    pub async fn mount(url: &str, notifier: Arc<dyn DesktopNotifier>) -> Result<Self> {
        if notifier.permission() != Permission::Granted {
            let permission = notifier.request_permission();
            debug!(?permission, "notification permission requested");
        }

        let (stream, _) = connect_async(url)
            .await
            .map_err(|err| anyhow!("failed to connect to relay at {}: {}", url, err))?;
        info!(url = %url, "connected to relay");

        let log = UpdateLog::new();
        let task_log = log.clone();
        let task = tokio::spawn(async move {
            let mut stream = stream;
            while let Some(frame) = stream.next().await {
                match frame {
                    Ok(Message::Text(text)) => {
                        handle_frame(&text, &task_log, notifier.as_ref());
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(err) => {
                        warn!(error = ?err, "relay connection failed");
                        break;
                    }
                }
            }
            info!("relay connection closed");
        });

        Ok(Self {
            log,
            task: Some(task),
        })
    }

    pub fn updates(&self) -> Vec<String> {
        self.log.snapshot()
    }

    pub fn is_connected(&self) -> bool {
        self.task.as_ref().map_or(false, |task| !task.is_finished())
    }

    /// Resolves once the relay connection ends.
    pub async fn closed(&mut self) {
        if let Some(task) = self.task.as_mut() {
            let _ = task.await;
        }
        self.task = None;
    }

    /// Stops handling events. The log stays readable.
    pub fn teardown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ClientShell {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingNotifier {
        permission: Permission,
        shown: Mutex<Vec<(String, String)>>,
    }

    impl RecordingNotifier {
        fn new(permission: Permission) -> Self {
            Self {
                permission,
                shown: Mutex::new(Vec::new()),
            }
        }
    }

    impl DesktopNotifier for RecordingNotifier {
        fn permission(&self) -> Permission {
            self.permission
        }

        fn request_permission(&self) -> Permission {
            self.permission
        }

        fn show(&self, title: &str, body: &str) {
            self.shown
                .lock()
                .unwrap()
                .push((title.to_string(), body.to_string()));
        }
    }

    #[test]
    fn granted_permission_raises_notification() {
        let log = UpdateLog::new();
        let notifier = RecordingNotifier::new(Permission::Granted);

        assert!(handle_frame(
            r#"{"event":"db_update","payload":"row-42"}"#,
            &log,
            &notifier
        ));

        assert_eq!(log.snapshot(), vec!["row-42".to_string()]);
        let shown = notifier.shown.lock().unwrap();
        assert_eq!(shown.as_slice(), &[("New DB Row".to_string(), "row-42".to_string())]);
    }

    #[test]
    fn denied_permission_still_records_payload() {
        let log = UpdateLog::new();
        let notifier = RecordingNotifier::new(Permission::Denied);

        assert!(handle_frame(
            r#"{"event":"db_update","payload":"row-7"}"#,
            &log,
            &notifier
        ));

        assert_eq!(log.len(), 1);
        assert!(notifier.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn other_frames_are_ignored() {
        let log = UpdateLog::new();
        let notifier = RecordingNotifier::new(Permission::Granted);

        assert!(!handle_frame("not json", &log, &notifier));
        assert!(!handle_frame(
            r#"{"event":"something_else","payload":"x"}"#,
            &log,
            &notifier
        ));
        assert!(log.is_empty());
    }
}
