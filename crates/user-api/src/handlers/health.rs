//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use user_service::dto::{HealthResponse, MessageResponse, ReadinessResponse};
use user_service::UserService;

use crate::state::AppState;

/// Legacy liveness probe
///
/// GET /healthcheck
pub async fn alive() -> Json<MessageResponse> {
    Json(MessageResponse::new("I am alive!"))
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.config().app.name.clone()))
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = UserService::new(state.service_context())
        .check_storage()
        .await
        .is_ok();

    let response = ReadinessResponse::ready(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
