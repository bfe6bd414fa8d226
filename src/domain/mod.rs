use serde::Serialize;

pub mod event;
pub mod incident;
pub mod notification;
pub mod stats;

/// Color token the dashboard paints badges and borders with.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Emergency,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    AlertTriangle,
    Eye,
    CheckCircle,
    Info,
    Users,
    Clock,
}
