//! External service clients.

pub mod oembed;

pub use oembed::{MetadataError, MetadataProvider, OEmbedClient};
