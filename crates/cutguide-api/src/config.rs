//! API configuration.

/// Default public oEmbed endpoint.
pub const DEFAULT_OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
    /// oEmbed endpoint used for title lookup
    pub oembed_endpoint: String,
    /// Expose Prometheus metrics at /metrics
    pub metrics_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 64 * 1024, // 64KB
            environment: "development".to_string(),
            oembed_endpoint: DEFAULT_OEMBED_ENDPOINT.to_string(),
            metrics_enabled: true,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("API_HOST").unwrap_or(defaults.host),
            port: lookup("API_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_size: lookup("MAX_BODY_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            oembed_endpoint: lookup("OEMBED_ENDPOINT").unwrap_or(defaults.oembed_endpoint),
            metrics_enabled: lookup("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}
