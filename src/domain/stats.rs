use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardStats {
    pub active_incidents: usize,
    pub critical_incidents: usize,
    pub response_teams: ResponseTeams,
    pub avg_response_minutes: f64,
    /// Percent change against last week; negative is faster.
    pub avg_response_change_pct: i32,
    pub resolved_today: u32,
    /// Percent change against yesterday.
    pub resolved_change_pct: i32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ResponseTeams {
    pub total: u32,
    pub deployed: u32,
    pub available: u32,
}
