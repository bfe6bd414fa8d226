use anyhow::{anyhow, Result};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::AppState;

mod error;
mod handlers;
mod routes;
mod ws;

pub use error::AppError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health())
        .merge(routes::relay())
        .merge(routes::dashboard())
        .merge(routes::incidents())
        .merge(routes::notifications())
        .with_state(state)
}

/// Cross-origin policy: exactly one origin, GET and POST only.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|err| anyhow!("invalid CORS_ORIGIN: {}", err))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST]))
}
