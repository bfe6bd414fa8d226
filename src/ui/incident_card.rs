use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::incident::{Incident, IncidentStatus, Priority};
use crate::domain::{Icon, Tone};
use crate::ui::Badge;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncidentAction {
    ViewDetails,
    AssignTeam,
    MarkResolved,
}

impl IncidentAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewDetails => "View Details",
            Self::AssignTeam => "Assign Team",
            Self::MarkResolved => "Mark Resolved",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionButton {
    pub action: IncidentAction,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusBadge {
    #[serde(flatten)]
    pub badge: Badge,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentCard {
    pub id: String,
    pub title: String,
    pub priority: Badge,
    pub status: StatusBadge,
    /// Left border accent; only critical and high incidents get one.
    pub highlight: Option<Tone>,
    pub id_line: String,
    pub description: String,
    pub location: String,
    pub reported: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned: Option<String>,
    pub actions: Vec<ActionButton>,
}

impl IncidentCard {
    pub fn build(incident: &Incident) -> Self {
        let highlight = match incident.priority {
            Priority::Critical => Some(Tone::Emergency),
            Priority::High => Some(Tone::Warning),
            Priority::Medium | Priority::Low => None,
        };

        Self {
            id: incident.id.clone(),
            title: incident.incident_type.clone(),
            priority: Badge::new(incident.priority.as_str(), incident.priority.tone()),
            status: StatusBadge {
                badge: Badge::new(incident.status.as_str(), incident.status.tone()),
                icon: incident.status.icon(),
            },
            highlight,
            id_line: format!("ID: {}", incident.id),
            description: incident.description.clone(),
            location: incident.location.clone(),
            reported: format!("Reported at {}", format_clock(incident.reported_at)),
            assigned: incident
                .assigned_team
                .as_ref()
                .map(|team| format!("Assigned to {}", team)),
            actions: actions_for(incident)
                .into_iter()
                .map(|action| ActionButton {
                    action,
                    label: action.label(),
                })
                .collect(),
        }
    }
}

pub fn actions_for(incident: &Incident) -> Vec<IncidentAction> {
    let mut actions = vec![IncidentAction::ViewDetails];
    match incident.status {
        IncidentStatus::Active => actions.push(IncidentAction::AssignTeam),
        IncidentStatus::Responding => actions.push(IncidentAction::MarkResolved),
        IncidentStatus::Resolved => {}
    }
    actions
}

/// `HH:MM`, in the timestamp's own offset.
pub fn format_clock(timestamp: OffsetDateTime) -> String {
    format!("{:02}:{:02}", timestamp.hour(), timestamp.minute())
}
