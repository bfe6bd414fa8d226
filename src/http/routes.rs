use axum::{routing::get, routing::post, Router};

use crate::http::{handlers, ws};
use crate::AppState;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn relay() -> Router<AppState> {
    Router::new().route("/ws", get(ws::ws_handler))
}

pub fn dashboard() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::get_dashboard))
}

pub fn incidents() -> Router<AppState> {
    Router::new()
        .route("/incidents", get(handlers::list_incidents))
        .route("/incidents/active", get(handlers::list_active_incidents))
        .route("/incidents/:id", get(handlers::get_incident))
        .route("/incidents/:id/assign", post(handlers::assign_team))
        .route("/incidents/:id/resolve", post(handlers::resolve_incident))
}

pub fn notifications() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::list_notifications))
        .route("/notifications/clear", post(handlers::clear_notifications))
        .route("/notifications/:id/read", post(handlers::mark_notification_read))
        .route("/notifications/:id/dismiss", post(handlers::dismiss_notification))
}
