//! Shared data models for the CutGuide backend.
//!
//! This crate provides Serde-serializable types for:
//! - Tutorial requests and the long/short video type flag
//! - oEmbed video metadata
//! - Tutorial documents and their two static templates
//! - YouTube video identifier extraction

pub mod request;
pub mod templates;
pub mod tutorial;
pub mod utils;
pub mod video;

// Re-export common types
pub use request::{TutorialRequest, VideoType};
pub use tutorial::{generate_tutorial, TutorialDocument, TutorialStep};
pub use utils::{extract_video_id, watch_url};
pub use video::VideoMetadata;
