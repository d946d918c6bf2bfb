//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::handlers::{analyze, health, index};
use crate::metrics::metrics_middleware;
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let api_routes = Router::new().route("/analyze", post(analyze));

    let page_routes = Router::new().route("/", get(index));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        // Enforced by the body extractor, so overflow reaches the handler as a rejection
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
