use crate::{errors::SummarizerError, front_matter::FrontMatter, platform::Platform};
use serde::{Deserialize, Serialize};

/// The MIME type sent with every media reference unless overridden.
pub const DEFAULT_MEDIA_MIME_TYPE: &str = "video/mp4";

/// Caller-supplied metadata about the video, usually exported from a bookmark manager.
///
/// Unknown keys in the JSON input are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the bookmark was created, passed through verbatim.
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

impl VideoMetadata {
    /// Parses metadata from the JSON string given on the command line.
    pub fn from_json(json: &str) -> Result<Self, SummarizerError> {
        serde_json::from_str(json).map_err(SummarizerError::InvalidMetadata)
    }
}

/// A reference to remote media the model should read alongside the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub uri: String,
    pub mime_type: String,
}

impl MediaRef {
    pub fn video(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: DEFAULT_MEDIA_MIME_TYPE.to_string(),
        }
    }
}

/// Everything needed to ask the model for one summary.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub video_url: String,
    pub platform: Platform,
    pub prompt: String,
    pub media: MediaRef,
    pub metadata: Option<VideoMetadata>,
}

/// The final output: the summary with its front matter, plus the parts it was built from.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    /// Front matter and markdown body combined.
    pub summary: String,
    /// Tags exactly as extracted from the model response.
    pub generated_tags: Vec<String>,
    pub front_matter: FrontMatter,
}
