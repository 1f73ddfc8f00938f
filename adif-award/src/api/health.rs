//! Welcome and health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

const HEALTHY: &str = "healthy";

/// Root endpoint response
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /
pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the ADIF award service. POST an ADIF log as the 'file' field to /upload_adif/."
            .to_string(),
        status: HEALTHY.to_string(),
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_string(),
    })
}

/// Build welcome and health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
}
