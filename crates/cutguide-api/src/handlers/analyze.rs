//! Tutorial analysis handler.
//!
//! Linear pipeline: parse body, require a URL, extract the video ID, look up
//! the title, build the tutorial. The first failure aborts the request.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use tracing::{error, info, warn};

use cutguide_models::{extract_video_id, generate_tutorial, TutorialDocument, TutorialRequest};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

pub const VIDEO_URL_REQUIRED: &str = "Video URL required है";
pub const INVALID_YOUTUBE_URL: &str = "Invalid YouTube URL";

/// Generate an editing tutorial for a YouTube video.
///
/// The body is read and parsed by hand so that an oversized or malformed
/// payload is reported as an unexpected (500) JSON error rather than an
/// extractor rejection.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<TutorialDocument>> {
    let production = state.config.is_production();
    run_pipeline(&state, body)
        .await
        .map_err(|e| e.for_environment(production))
}

async fn run_pipeline(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<TutorialDocument>> {
    let body = body.map_err(|e| {
        warn!("Failed to read analyze request body: {}", e);
        ApiError::internal(format!("Failed to read request body: {}", e))
    })?;

    let request: TutorialRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Failed to parse analyze request: {}", e);
        ApiError::internal(format!("Invalid request body: {}", e))
    })?;

    let video_url = request
        .video_url()
        .ok_or_else(|| ApiError::bad_request(VIDEO_URL_REQUIRED))?;

    let video_id = extract_video_id(video_url).ok_or_else(|| {
        info!(url = %video_url, "Rejected unrecognized video URL");
        ApiError::bad_request(INVALID_YOUTUBE_URL)
    })?;

    let start = Instant::now();
    let metadata = state.metadata.fetch(&video_id).await.map_err(|e| {
        error!(video_id = %video_id, "Metadata lookup failed: {}", e);
        metrics::record_metadata_failure();
        ApiError::from(e)
    })?;
    metrics::record_metadata_duration(start.elapsed().as_secs_f64());

    let tutorial = generate_tutorial(request.video_type, &metadata.title);
    metrics::record_tutorial_generated(request.video_type.as_str());

    info!(
        video_id = %video_id,
        video_type = %request.video_type,
        "Generated editing tutorial"
    );

    Ok(Json(tutorial))
}
