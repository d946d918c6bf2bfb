//! oEmbed client for video title lookup.
//!
//! One GET per request against the public oEmbed endpoint. There is no
//! retry and no timeout beyond the reqwest client default.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

use cutguide_models::{watch_url, VideoMetadata};

/// Errors from a metadata lookup.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid oEmbed endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("oEmbed request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("oEmbed returned {0}")]
    Status(StatusCode),

    #[error("failed to parse oEmbed response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Source of video metadata keyed by video identifier.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<VideoMetadata, MetadataError>;
}

/// reqwest-backed oEmbed client.
#[derive(Debug, Clone)]
pub struct OEmbedClient {
    endpoint: Url,
    client: Client,
}

impl OEmbedClient {
    /// Create a client for the given oEmbed endpoint.
    pub fn new(endpoint: &str) -> Result<Self, MetadataError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            client: Client::new(),
        })
    }

    /// Lookup URL for a video: `<endpoint>?url=<watch url>&format=json`.
    pub fn request_url(&self, video_id: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("url", &watch_url(video_id))
            .append_pair("format", "json");
        url
    }
}

#[async_trait]
impl MetadataProvider for OEmbedClient {
    async fn fetch(&self, video_id: &str) -> Result<VideoMetadata, MetadataError> {
        let url = self.request_url(video_id);
        debug!("Fetching oEmbed metadata: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(MetadataError::Request)?;

        if !response.status().is_success() {
            return Err(MetadataError::Status(response.status()));
        }

        response.json().await.map_err(MetadataError::Decode)
    }
}
