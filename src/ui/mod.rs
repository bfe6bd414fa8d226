//! View models for the dashboard. Pure functions of store state; the browser
//! only paints what these produce.

use serde::Serialize;

use crate::domain::Tone;

pub mod dashboard;
pub mod incident_card;
pub mod notification_panel;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    /// Badge labels render upper-cased.
    pub fn new(label: &str, tone: Tone) -> Self {
        Self {
            label: label.to_uppercase(),
            tone,
        }
    }
}
