//! Axum HTTP API server.
//!
//! This crate provides:
//! - The `/api/analyze` tutorial endpoint
//! - The embedded tutorial form page
//! - oEmbed metadata lookup
//! - Security headers, request IDs and Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{MetadataError, MetadataProvider, OEmbedClient};
pub use state::AppState;
