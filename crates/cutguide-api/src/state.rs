//! Application state.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::{MetadataError, MetadataProvider, OEmbedClient};

/// Shared application state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub metadata: Arc<dyn MetadataProvider>,
}

impl AppState {
    /// Create new application state backed by the configured oEmbed endpoint.
    pub fn new(config: ApiConfig) -> Result<Self, MetadataError> {
        let metadata = OEmbedClient::new(&config.oembed_endpoint)?;
        Ok(Self::with_metadata_provider(config, Arc::new(metadata)))
    }

    /// Create state with an explicit metadata provider.
    pub fn with_metadata_provider(config: ApiConfig, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self { config, metadata }
    }
}
