use thiserror::Error;
use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::incident::{Incident, IncidentStatus, Priority};
use crate::domain::stats::{DashboardStats, ResponseTeams};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("incident {0} not found")]
    NotFound(String),
    #[error("incident {id} is {from}, cannot {action}")]
    InvalidTransition {
        id: String,
        from: &'static str,
        action: &'static str,
    },
    #[error("team must not be empty")]
    EmptyTeam,
}

/// Incident list backing the command-center view.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    incidents: Vec<Incident>,
    notifications_cleared_at: Option<OffsetDateTime>,
}

impl DashboardStore {
    pub fn new(incidents: Vec<Incident>) -> Self {
        Self {
            incidents,
            notifications_cleared_at: None,
        }
    }

    pub fn with_samples() -> Self {
        Self::new(vec![
            Incident {
                id: "INC-001".to_string(),
                incident_type: "Structure Fire".to_string(),
                priority: Priority::Critical,
                location: "Downtown District, Main St & 5th Ave".to_string(),
                description: "Multi-story building fire with potential occupants trapped"
                    .to_string(),
                reported_at: datetime!(2024-01-15 10:30 UTC),
                status: IncidentStatus::Responding,
                assigned_team: Some("Fire Team Alpha".to_string()),
            },
            Incident {
                id: "INC-002".to_string(),
                incident_type: "Medical Emergency".to_string(),
                priority: Priority::High,
                location: "Residential Area, Oak Park Drive".to_string(),
                description: "Cardiac arrest, CPR in progress".to_string(),
                reported_at: datetime!(2024-01-15 10:25 UTC),
                status: IncidentStatus::Active,
                assigned_team: Some("Paramedic Unit 3".to_string()),
            },
            Incident {
                id: "INC-003".to_string(),
                incident_type: "Traffic Accident".to_string(),
                priority: Priority::Medium,
                location: "Highway 101, Mile Marker 23".to_string(),
                description: "Multi-vehicle collision, minor injuries reported".to_string(),
                reported_at: datetime!(2024-01-15 10:15 UTC),
                status: IncidentStatus::Resolved,
                assigned_team: None,
            },
        ])
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn get(&self, id: &str) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    /// Everything not yet resolved, in list order.
    pub fn active_incidents(&self) -> Vec<&Incident> {
        self.incidents.iter().filter(|i| i.is_active()).collect()
    }

    /// Critical incidents regardless of status.
    pub fn critical_incidents(&self) -> Vec<&Incident> {
        self.incidents
            .iter()
            .filter(|i| i.priority == Priority::Critical)
            .collect()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            active_incidents: self.active_incidents().len(),
            critical_incidents: self.critical_incidents().len(),
            response_teams: ResponseTeams {
                total: 12,
                deployed: 8,
                available: 4,
            },
            avg_response_minutes: 4.2,
            avg_response_change_pct: -12,
            resolved_today: 23,
            resolved_change_pct: 8,
        }
    }

    /// Dispatches `team` to an active incident, which moves it to responding.
    pub fn assign_team(&mut self, id: &str, team: &str) -> Result<&Incident, DashboardError> {
        let team = team.trim();
        if team.is_empty() {
            return Err(DashboardError::EmptyTeam);
        }

        let incident = self.find_mut(id)?;
        if incident.status != IncidentStatus::Active {
            return Err(DashboardError::InvalidTransition {
                id: incident.id.clone(),
                from: incident.status.as_str(),
                action: "assign a team",
            });
        }

        incident.status = IncidentStatus::Responding;
        incident.assigned_team = Some(team.to_string());
        Ok(&*incident)
    }

    pub fn mark_resolved(&mut self, id: &str) -> Result<&Incident, DashboardError> {
        let incident = self.find_mut(id)?;
        if incident.status != IncidentStatus::Responding {
            return Err(DashboardError::InvalidTransition {
                id: incident.id.clone(),
                from: incident.status.as_str(),
                action: "mark resolved",
            });
        }

        incident.status = IncidentStatus::Resolved;
        Ok(&*incident)
    }

    /// Records that the notification panel was cleared.
    pub fn notifications_cleared(&mut self, at: OffsetDateTime) {
        self.notifications_cleared_at = Some(at);
    }

    pub fn notifications_cleared_at(&self) -> Option<OffsetDateTime> {
        self.notifications_cleared_at
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Incident, DashboardError> {
        self.incidents
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DashboardError::NotFound(id.to_string()))
    }
}
