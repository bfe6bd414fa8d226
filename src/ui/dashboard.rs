use serde::Serialize;
use time::OffsetDateTime;

use crate::app::dashboard::DashboardStore;
use crate::app::notifications::NotificationPanel;
use crate::domain::stats::DashboardStats;
use crate::domain::{Icon, Tone};
use crate::ui::incident_card::{format_clock, IncidentCard};
use crate::ui::notification_panel::NotificationPanelView;

pub const TITLE: &str = "Emergency Command Center";
pub const SUBTITLE: &str = "Real-time incident monitoring and response coordination";
pub const ALL_RESOLVED_PLACEHOLDER: &str = "All incidents resolved";
pub const QUICK_ACTIONS: [&str; 3] = ["Emergency Dispatch", "View Map", "Team Status"];

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub system_status: &'static str,
    pub last_update: String,
    /// HH:MM of the last "Clear All" on the notification panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_cleared: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub header: Header,
    pub stats: Vec<StatCard>,
    pub active_incidents: Vec<IncidentCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incidents_placeholder: Option<&'static str>,
    pub notifications: NotificationPanelView,
    pub quick_actions: [&'static str; 3],
}

impl DashboardView {
    pub fn build(
        store: &DashboardStore,
        panel: &NotificationPanel,
        now: OffsetDateTime,
    ) -> Self {
        let active_incidents: Vec<IncidentCard> = store
            .active_incidents()
            .into_iter()
            .map(IncidentCard::build)
            .collect();

        Self {
            header: Header {
                title: TITLE,
                subtitle: SUBTITLE,
                system_status: "System Active",
                last_update: format_clock(now),
                notifications_cleared: store.notifications_cleared_at().map(format_clock),
            },
            stats: stat_cards(&store.stats()),
            incidents_placeholder: active_incidents
                .is_empty()
                .then_some(ALL_RESOLVED_PLACEHOLDER),
            active_incidents,
            notifications: NotificationPanelView::build(panel, now),
            quick_actions: QUICK_ACTIONS,
        }
    }
}

fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Active Incidents",
            value: stats.active_incidents.to_string(),
            caption: format!("{} critical priority", stats.critical_incidents),
            icon: Icon::AlertTriangle,
            tone: Tone::Warning,
        },
        StatCard {
            title: "Response Teams",
            value: stats.response_teams.total.to_string(),
            caption: format!(
                "{} deployed, {} available",
                stats.response_teams.deployed, stats.response_teams.available
            ),
            icon: Icon::Users,
            tone: Tone::Info,
        },
        StatCard {
            title: "Avg Response",
            value: format!("{:.1}m", stats.avg_response_minutes),
            caption: format!("{} from last week", signed_pct(stats.avg_response_change_pct)),
            icon: Icon::Clock,
            tone: Tone::Success,
        },
        StatCard {
            title: "Resolved Today",
            value: stats.resolved_today.to_string(),
            caption: format!("{} from yesterday", signed_pct(stats.resolved_change_pct)),
            icon: Icon::CheckCircle,
            tone: Tone::Success,
        },
    ]
}

fn signed_pct(value: i32) -> String {
    if value > 0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}
