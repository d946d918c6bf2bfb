//! Tutorial document models.

use serde::{Deserialize, Serialize};

use crate::request::VideoType;
use crate::templates::{StepTemplate, TutorialTemplate, LONG_FORM, SHORT_FORM};

/// One ordered step of an editing tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialStep {
    pub title: String,
    pub description: String,
    pub tools: String,
    pub timestamp: String,
}

impl From<&StepTemplate> for TutorialStep {
    fn from(step: &StepTemplate) -> Self {
        Self {
            title: step.title.to_string(),
            description: step.description.to_string(),
            tools: step.tools.to_string(),
            timestamp: step.timestamp.to_string(),
        }
    }
}

/// Editing tutorial returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialDocument {
    /// Overview sentence, the only field that mentions the video title
    pub overview: String,
    pub editing_style: String,
    pub steps: Vec<TutorialStep>,
    pub techniques: Vec<String>,
    pub software: Vec<String>,
    pub tips: Vec<String>,
}

impl TutorialDocument {
    fn from_template(template: &TutorialTemplate, title: &str) -> Self {
        Self {
            overview: template.overview(title),
            editing_style: template.editing_style.to_string(),
            steps: template.steps.iter().map(TutorialStep::from).collect(),
            techniques: to_owned_list(template.techniques),
            software: to_owned_list(template.software),
            tips: to_owned_list(template.tips),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Template backing a video type.
pub fn template_for(video_type: VideoType) -> &'static TutorialTemplate {
    match video_type {
        VideoType::Short => &SHORT_FORM,
        VideoType::Long => &LONG_FORM,
    }
}

/// Build the editing tutorial for a video type and title.
///
/// The result depends only on `video_type`, with `title` interpolated into
/// `overview`.
pub fn generate_tutorial(video_type: VideoType, title: &str) -> TutorialDocument {
    TutorialDocument::from_template(template_for(video_type), title)
}
