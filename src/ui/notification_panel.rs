use serde::Serialize;
use time::OffsetDateTime;

use crate::app::notifications::{format_relative, NotificationPanel};
use crate::domain::notification::NotificationKind;
use crate::domain::{Icon, Tone};

pub const EMPTY_PLACEHOLDER: &str = "No notifications";

#[derive(Debug, Clone, Serialize)]
pub struct NotificationItemView {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub icon: Icon,
    pub tone: Tone,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
    /// Unread emergencies pulse.
    pub pulse: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationPanelView {
    /// Omitted when nothing is unread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_badge: Option<usize>,
    pub show_clear_all: bool,
    pub items: Vec<NotificationItemView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl NotificationPanelView {
    pub fn build(panel: &NotificationPanel, now: OffsetDateTime) -> Self {
        let unread = panel.unread_count();
        let items: Vec<NotificationItemView> = panel
            .items()
            .iter()
            .map(|n| NotificationItemView {
                id: n.id.clone(),
                kind: n.kind,
                icon: n.kind.icon(),
                tone: n.kind.tone(),
                title: n.title.clone(),
                message: n.message.clone(),
                time: format_relative(n.timestamp, now),
                read: n.read,
                pulse: !n.read && n.kind == NotificationKind::Emergency,
            })
            .collect();

        Self {
            unread_badge: (unread > 0).then_some(unread),
            show_clear_all: !items.is_empty(),
            placeholder: items.is_empty().then_some(EMPTY_PLACEHOLDER),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_panel_renders_placeholder() {
        let view = NotificationPanelView::build(&NotificationPanel::new(), OffsetDateTime::now_utc());
        assert_eq!(view.placeholder, Some("No notifications"));
        assert_eq!(view.unread_badge, None);
        assert!(!view.show_clear_all);
    }

    #[test]
    fn sample_panel_view() {
        let now = OffsetDateTime::now_utc();
        let view = NotificationPanelView::build(&NotificationPanel::with_samples(now), now);

        assert_eq!(view.unread_badge, Some(2));
        assert!(view.show_clear_all);
        assert_eq!(view.placeholder, None);
        assert_eq!(view.items[0].time, "Just now");
        assert!(view.items[0].pulse);
        assert_eq!(view.items[1].time, "2m ago");
        assert_eq!(view.items[2].icon, Icon::CheckCircle);
    }
}
