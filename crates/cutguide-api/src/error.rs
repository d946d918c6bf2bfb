//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::services::MetadataError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Shown instead of internal details in production.
const GENERIC_ERROR: &str = "कुछ गलत हो गया";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unable to fetch video metadata")]
    MetadataUnavailable(#[source] MetadataError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MetadataUnavailable(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Replace internal detail with a generic message in production.
    pub fn for_environment(self, production: bool) -> Self {
        match self {
            ApiError::Internal(_) if production => ApiError::Internal(GENERIC_ERROR.to_string()),
            other => other,
        }
    }

    /// Message placed in the `error` field of the response body.
    fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg.clone(),
            ApiError::MetadataUnavailable(_) => self.to_string(),
        }
    }
}

impl From<MetadataError> for ApiError {
    fn from(err: MetadataError) -> Self {
        ApiError::MetadataUnavailable(err)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
