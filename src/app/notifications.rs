use time::{Duration, OffsetDateTime};

use crate::domain::notification::{Notification, NotificationKind};

/// Most entries the panel keeps; older ones fall off the end.
pub const MAX_NOTIFICATIONS: usize = 10;

/// In-memory notification list, newest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationPanel {
    items: Vec<Notification>,
}

impl NotificationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples(now: OffsetDateTime) -> Self {
        Self {
            items: vec![
                Notification {
                    id: "notif-1".to_string(),
                    kind: NotificationKind::Emergency,
                    title: "New Critical Incident".to_string(),
                    message: "Structure fire reported at Main St & 5th Ave".to_string(),
                    timestamp: now,
                    read: false,
                },
                Notification {
                    id: "notif-2".to_string(),
                    kind: NotificationKind::Info,
                    title: "Team Deployed".to_string(),
                    message: "Fire Team Alpha dispatched to incident INC-001".to_string(),
                    timestamp: now - Duration::minutes(2),
                    read: false,
                },
                Notification {
                    id: "notif-3".to_string(),
                    kind: NotificationKind::Success,
                    title: "Incident Resolved".to_string(),
                    message: "Traffic accident on Highway 101 cleared".to_string(),
                    timestamp: now - Duration::minutes(5),
                    read: true,
                },
            ],
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Prepends `notification`, trimming the list to `MAX_NOTIFICATIONS`.
    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
        self.items.truncate(MAX_NOTIFICATIONS);
    }

    /// Returns false when no entry has this id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Empties the panel, returning how many entries were dropped.
    pub fn clear_all(&mut self) -> usize {
        let cleared = self.items.len();
        self.items.clear();
        cleared
    }
}

/// Renders how long ago `timestamp` was, relative to `now`.
pub fn format_relative(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let minutes = (now - timestamp).whole_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let date = timestamp.date();
    format!(
        "{:02}/{:02}/{}",
        u8::from(date.month()),
        date.day(),
        date.year()
    )
}
