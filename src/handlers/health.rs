use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::services::health_check::{HealthCheckStatus, HealthStatus};
use crate::AppState;

/// Health check endpoint
///
/// Returns 503 while the record store is unreachable.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 503, description = "Record store unreachable", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let status = state.health_checker.check().await;

    let code = match status.status {
        HealthCheckStatus::Healthy => StatusCode::OK,
        HealthCheckStatus::Unhealthy => {
            tracing::warn!("Health check failed: {:?}", status.dependencies);
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (code, Json(status))
}

/// Prometheus metrics endpoint
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "health",
    responses(
        (status = 200, description = "Prometheus metrics", content_type = "text/plain"),
        (status = 503, description = "Metrics recorder not installed")
    )
)]
pub async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics_handle {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "Metrics recorder not installed").into_response(),
    }
}
