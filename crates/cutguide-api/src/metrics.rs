//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "cutguide_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "cutguide_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "cutguide_http_requests_in_flight";

    // Tutorial metrics
    pub const TUTORIALS_GENERATED_TOTAL: &str = "cutguide_tutorials_generated_total";
    pub const METADATA_FETCH_FAILURES_TOTAL: &str = "cutguide_metadata_fetch_failures_total";
    pub const METADATA_FETCH_DURATION_SECONDS: &str = "cutguide_metadata_fetch_duration_seconds";
}

/// Label used when no route matched.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Record an HTTP request.
pub fn record_http_request(method: &str, route: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", route.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a generated tutorial.
pub fn record_tutorial_generated(video_type: &str) {
    let labels = [("type", video_type.to_string())];
    counter!(names::TUTORIALS_GENERATED_TOTAL, &labels).increment(1);
}

/// Record a failed metadata lookup.
pub fn record_metadata_failure() {
    counter!(names::METADATA_FETCH_FAILURES_TOTAL).increment(1);
}

/// Record metadata lookup duration.
pub fn record_metadata_duration(duration_secs: f64) {
    histogram!(names::METADATA_FETCH_DURATION_SECONDS).record(duration_secs);
}

/// Route template for labels, so raw paths never become label values.
fn route_label(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let route = route_label(&request);
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &route, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::routing::post;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    async fn echo_route_label(request: Request<Body>, next: Next) -> Response<Body> {
        let route = route_label(&request);
        let mut response = next.run(request).await;
        response
            .headers_mut()
            .insert("x-route", HeaderValue::from_str(&route).unwrap());
        response
    }

    fn nested_router() -> Router {
        Router::new()
            .nest("/api", Router::new().route("/analyze", post(|| async { "ok" })))
            .layer(middleware::from_fn(echo_route_label))
    }

    async fn label_for(uri: &str) -> String {
        let response = nested_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.headers()["x-route"].to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_route_label_nested_template() {
        assert_eq!(label_for("/api/analyze").await, "/api/analyze");
    }

    #[tokio::test]
    async fn test_route_label_unknown_path() {
        assert_eq!(label_for("/api/videos/abc123").await, UNMATCHED_ROUTE);
    }

    #[test]
    fn test_route_label_unmatched() {
        let request = Request::builder()
            .uri("/api/videos/abc123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(route_label(&request), UNMATCHED_ROUTE);
    }
}
