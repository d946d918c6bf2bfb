//! API integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use cutguide_api::{create_router, ApiConfig, AppState, MetadataError, MetadataProvider};
use cutguide_models::VideoMetadata;

/// Provider returning a fixed title and recording requested IDs.
struct StubProvider {
    title: String,
    requested: Mutex<Vec<String>>,
}

impl StubProvider {
    fn with_title(title: &str) -> Arc<Self> {
        Arc::new(Self {
            title: title.to_string(),
            requested: Mutex::new(Vec::new()),
        })
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataProvider for StubProvider {
    async fn fetch(&self, video_id: &str) -> Result<VideoMetadata, MetadataError> {
        self.requested.lock().unwrap().push(video_id.to_string());
        Ok(VideoMetadata::new(self.title.clone()))
    }
}

/// Provider simulating an upstream outage.
struct FailingProvider;

#[async_trait]
impl MetadataProvider for FailingProvider {
    async fn fetch(&self, _video_id: &str) -> Result<VideoMetadata, MetadataError> {
        Err(MetadataError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }
}

fn router_with(provider: Arc<dyn MetadataProvider>) -> Router {
    router_with_config(ApiConfig::default(), provider)
}

fn router_with_config(config: ApiConfig, provider: Arc<dyn MetadataProvider>) -> Router {
    let state = AppState::with_metadata_provider(config, provider);
    create_router(state, None)
}

fn analyze_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Test health endpoint.
#[tokio::test]
async fn test_health_endpoint() {
    let app = router_with(StubProvider::with_title("unused"));

    let (status, body) = send(
        app,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

/// Test the form page is served.
#[tokio::test]
async fn test_index_page() {
    let app = router_with(StubProvider::with_title("unused"));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("YouTube Video Editing Tutorial Agent"));
    assert!(html.contains("/api/analyze"));
}

#[tokio::test]
async fn test_short_form_tutorial() {
    let provider = StubProvider::with_title("My Vlog");
    let app = router_with(provider.clone());

    let (status, body) = send(
        app,
        analyze_request(
            json!({
                "videoUrl": "https://www.youtube.com/watch?v=abc123&t=5",
                "videoType": "short"
            })
            .to_string(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.requested(), vec!["abc123"]);
    assert!(body["overview"].as_str().unwrap().contains("\"My Vlog\""));
    assert!(body["overview"].as_str().unwrap().starts_with("यह YouTube Short video"));
    assert_eq!(body["steps"].as_array().unwrap().len(), 7);
    assert_eq!(body["software"][0], "CapCut");
    assert!(body["editingStyle"].is_string());
    assert!(body["tips"].is_array());
}

#[tokio::test]
async fn test_missing_type_defaults_to_long_form() {
    let provider = StubProvider::with_title("Deep Dive");
    let app = router_with(provider.clone());

    let (status, body) = send(
        app,
        analyze_request(json!({ "videoUrl": "https://youtu.be/XYZ?si=share" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.requested(), vec!["XYZ"]);
    assert!(body["overview"].as_str().unwrap().starts_with("यह YouTube long-form video"));
    assert_eq!(body["steps"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_unknown_type_uses_long_form() {
    let app = router_with(StubProvider::with_title("T"));

    let (status, body) = send(
        app,
        analyze_request(
            json!({ "videoUrl": "https://www.youtube.com/shorts/abc", "videoType": "reel" })
                .to_string(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["steps"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_empty_url_is_bad_request() {
    let provider = StubProvider::with_title("unused");
    let app = router_with(provider.clone());

    let (status, body) = send(
        app,
        analyze_request(json!({ "videoUrl": "", "videoType": "long" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Video URL required है");
    assert!(provider.requested().is_empty());
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    let app = router_with(StubProvider::with_title("unused"));

    let (status, body) = send(app, analyze_request(json!({}).to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_non_youtube_url_is_bad_request() {
    let provider = StubProvider::with_title("unused");
    let app = router_with(provider.clone());

    let (status, body) = send(
        app,
        analyze_request(json!({ "videoUrl": "https://vimeo.com/123456" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid YouTube URL");
    assert!(provider.requested().is_empty());
}

#[tokio::test]
async fn test_metadata_failure_is_server_error() {
    let app = router_with(Arc::new(FailingProvider));

    let (status, body) = send(
        app,
        analyze_request(
            json!({ "videoUrl": "https://youtu.be/dQw4w9WgXcQ", "videoType": "short" })
                .to_string(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Unable to fetch video metadata");
    assert!(body.get("overview").is_none());
    assert!(body.get("steps").is_none());
}

#[tokio::test]
async fn test_malformed_body_is_server_error() {
    let app = router_with(StubProvider::with_title("unused"));

    let (status, body) = send(app, analyze_request("{not json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_response_headers() {
    let app = router_with(StubProvider::with_title("unused"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Request-ID", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["X-Request-ID"], "req-42");
    assert_eq!(response.headers()["X-Content-Type-Options"], "nosniff");
}

/// Metrics route is only mounted when a recorder handle is supplied.
#[tokio::test]
async fn test_metrics_disabled() {
    let app = router_with(StubProvider::with_title("unused"));

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_whitespace_url_is_missing() {
    let provider = StubProvider::with_title("unused");
    let app = router_with(provider.clone());

    let (status, body) = send(
        app,
        analyze_request(json!({ "videoUrl": "   ", "videoType": "short" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Video URL required है");
    assert!(provider.requested().is_empty());
}

/// Bodies over the configured limit take the unexpected-error path.
#[tokio::test]
async fn test_oversized_body_is_json_server_error() {
    let provider = StubProvider::with_title("unused");
    let app = router_with(provider.clone());

    let payload = json!({
        "videoUrl": "https://youtu.be/abc",
        "pad": "x".repeat(70 * 1024),
    })
    .to_string();

    let mut request = analyze_request(payload.clone());
    request
        .headers_mut()
        .insert(header::CONTENT_LENGTH, payload.len().into());

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.starts_with("application/json"));
    assert!(body["error"].is_string());
    assert!(provider.requested().is_empty());
}

#[tokio::test]
async fn test_production_hides_internal_detail() {
    let config = ApiConfig {
        environment: "production".to_string(),
        ..ApiConfig::default()
    };
    let app = router_with_config(config, StubProvider::with_title("unused"));

    let (status, body) = send(app, analyze_request("{not json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "कुछ गलत हो गया");
}

#[tokio::test]
async fn test_development_shows_internal_detail() {
    let app = router_with(StubProvider::with_title("unused"));

    let (_, body) = send(app, analyze_request("{not json")).await;

    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_padded_url_is_trimmed() {
    let provider = StubProvider::with_title("Padded");
    let app = router_with(provider.clone());

    let (status, _) = send(
        app,
        analyze_request(json!({ "videoUrl": " https://youtu.be/abc " }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.requested(), vec!["abc"]);
}
