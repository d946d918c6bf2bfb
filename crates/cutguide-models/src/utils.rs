//! Utility functions for YouTube URL parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Recognized URL shapes: `youtube.com/watch?v=`, `youtu.be/` and `youtube.com/shorts/`.
/// The captured identifier stops at the first `&`, newline, `?` or `#`.
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/shorts/)([^&\n?#]+)")
        .expect("video id pattern is valid")
});

/// Extract the video identifier from a YouTube URL.
///
/// Returns `None` when no recognized shape matches. The captured token is not
/// checked for length or charset, so `watch?v=abc123` yields `abc123`.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Canonical watch URL for a video identifier.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
