use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{Icon, Tone};

/// One entry of the dashboard notification panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Emergency,
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Emergency => Tone::Emergency,
            Self::Info => Tone::Info,
            Self::Success => Tone::Success,
            Self::Warning => Tone::Warning,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::Emergency | Self::Warning => Icon::AlertTriangle,
            Self::Success => Icon::CheckCircle,
            Self::Info => Icon::Info,
        }
    }
}
