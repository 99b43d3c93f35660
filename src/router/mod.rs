//! Router configuration module

use axum::{middleware::from_fn, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;
use crate::handlers::{employee_routes, health};
use crate::middleware::{add_security_headers, metrics_middleware, request_logger_middleware};
use crate::openapi::ApiDoc;

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    let request_timeout = Duration::from_secs(app_state.config.request_timeout);

    // Health and metrics routes (always at root)
    let health = Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::prometheus_metrics));

    health
        .nest("/api/employees", employee_routes()) // GET/POST /, GET/PUT/DELETE /{id}
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        // Route-level so the matched template is visible to the metrics labels
        .route_layer(from_fn(metrics_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_logger_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(add_security_headers))
                .layer(TimeoutLayer::with_status_code(
                    axum::http::StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
