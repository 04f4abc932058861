//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use coreledger_api_types::HealthReport;
use tracing::{debug, warn};

use crate::context::HealthContext;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");
    Json(HealthReport::healthy())
}

/// Liveness check endpoint
///
/// Returns 200 as long as the process can serve requests.
pub async fn liveness_check() -> impl IntoResponse {
    Json(HealthReport::healthy())
}

/// Readiness check endpoint
///
/// Pings the database. An unreachable database is reported as a plain 503
/// status body rather than an error envelope.
pub async fn readiness_check(State(ctx): State<HealthContext>) -> impl IntoResponse {
    match ctx.database.health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthReport::healthy())),
        Err(e) => {
            warn!(error = %e.detail(), "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthReport::unhealthy()))
        }
    }
}
