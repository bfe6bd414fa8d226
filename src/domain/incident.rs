use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{Icon, Tone};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub incident_type: String,
    pub priority: Priority,
    pub location: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub reported_at: OffsetDateTime,
    pub status: IncidentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_team: Option<String>,
}

impl Incident {
    pub fn is_active(&self) -> bool {
        self.status != IncidentStatus::Resolved
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Critical => Tone::Emergency,
            Self::High => Tone::Warning,
            Self::Medium => Tone::Info,
            Self::Low => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Active,
    Responding,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Responding => "responding",
            Self::Resolved => "resolved",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Warning,
            Self::Responding => Tone::Info,
            Self::Resolved => Tone::Success,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::Active => Icon::AlertTriangle,
            Self::Responding => Icon::Eye,
            Self::Resolved => Icon::CheckCircle,
        }
    }
}
