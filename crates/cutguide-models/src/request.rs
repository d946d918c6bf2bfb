//! Tutorial request models.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of video the tutorial is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoType {
    /// Long-form video (default branch)
    #[default]
    Long,
    /// YouTube Shorts (vertical short-form)
    Short,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Long => "long",
            VideoType::Short => "short",
        }
    }

    /// Resolve a raw flag. Only `"short"` selects the short-form branch.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "short" {
            VideoType::Short
        } else {
            VideoType::Long
        }
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for VideoType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any value other than the exact string "short" falls back to long-form.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(flag) => VideoType::from_flag(&flag),
            _ => VideoType::Long,
        })
    }
}

/// Tutorial request submitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialRequest {
    /// Raw user-pasted video URL (untrusted)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub video_url: String,

    /// Long-form or short-form template selector
    #[serde(default)]
    pub video_type: VideoType,
}

impl TutorialRequest {
    pub fn new(video_url: impl Into<String>, video_type: VideoType) -> Self {
        Self {
            video_url: video_url.into(),
            video_type,
        }
    }

    /// The submitted URL, or `None` when it is blank.
    pub fn video_url(&self) -> Option<&str> {
        let url = self.video_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

/// `null` is treated like a missing URL.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
