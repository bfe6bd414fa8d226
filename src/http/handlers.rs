use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::incident::Incident;
use crate::http::AppError;
use crate::ui::dashboard::DashboardView;
use crate::ui::incident_card::IncidentCard;
use crate::ui::notification_panel::NotificationPanelView;
use crate::AppState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    clients: usize,
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = match state.db.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = ?err, "database ping failed");
            false
        }
    };
    let status = if db { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        clients: state.hub.connection_count(),
    })
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let dashboard = state.dashboard.read();
    let notifications = state.notifications.read();
    Json(DashboardView::build(
        &dashboard,
        &notifications,
        OffsetDateTime::now_utc(),
    ))
}

pub async fn list_incidents(State(state): State<AppState>) -> Json<Vec<Incident>> {
    Json(state.dashboard.read().incidents().to_vec())
}

pub async fn list_active_incidents(State(state): State<AppState>) -> Json<Vec<IncidentCard>> {
    let dashboard = state.dashboard.read();
    let cards = dashboard
        .active_incidents()
        .into_iter()
        .map(IncidentCard::build)
        .collect();
    Json(cards)
}

pub async fn get_incident(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IncidentCard>, AppError> {
    let dashboard = state.dashboard.read();
    let incident = dashboard
        .get(&id)
        .ok_or_else(|| AppError::not_found("incident not found"))?;
    Ok(Json(IncidentCard::build(incident)))
}

#[derive(Deserialize)]
pub struct AssignTeamRequest {
    pub team: String,
}

pub async fn assign_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AssignTeamRequest>,
) -> Result<Json<IncidentCard>, AppError> {
    let mut dashboard = state.dashboard.write();
    let incident = dashboard.assign_team(&id, &payload.team)?;
    tracing::info!(incident_id = %id, team = %payload.team.trim(), "team assigned");
    Ok(Json(IncidentCard::build(incident)))
}

pub async fn resolve_incident(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IncidentCard>, AppError> {
    let mut dashboard = state.dashboard.write();
    let incident = dashboard.mark_resolved(&id)?;
    tracing::info!(incident_id = %id, "incident resolved");
    Ok(Json(IncidentCard::build(incident)))
}

pub async fn list_notifications(State(state): State<AppState>) -> Json<NotificationPanelView> {
    let panel = state.notifications.read();
    Json(NotificationPanelView::build(&panel, OffsetDateTime::now_utc()))
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.notifications.write().mark_read(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("notification not found"))
    }
}

pub async fn dismiss_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.notifications.write().remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("notification not found"))
    }
}

#[derive(Serialize)]
pub struct ClearResponse {
    pub cleared: usize,
}

pub async fn clear_notifications(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.notifications.write().clear_all();
    state
        .dashboard
        .write()
        .notifications_cleared(OffsetDateTime::now_utc());
    tracing::info!(cleared, "notifications cleared");
    Json(ClearResponse { cleared })
}
