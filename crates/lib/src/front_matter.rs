//! # Front Matter
//!
//! The YAML metadata header prepended to every summary.

use crate::{errors::SummarizerError, platform::Platform, types::VideoMetadata};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Used when the caller does not supply a title.
pub const DEFAULT_TITLE: &str = "Video Summary";

/// The line placed above and below the serialized header.
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// The metadata header. Field order is the serialization order.
///
/// Absent values, blank strings and empty tag lists are never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub generated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Assembles the header for a video. `tags` is expected to be deduplicated already.
    pub fn new(
        video_url: &str,
        platform: Platform,
        video_id: Option<String>,
        metadata: Option<&VideoMetadata>,
        tags: Vec<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let title = metadata
            .and_then(|m| non_blank(m.title.as_deref()))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self {
            title,
            url: video_url.trim().to_string(),
            platform,
            video_id: non_blank(video_id.as_deref()),
            generated: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            created: metadata.and_then(|m| non_blank(m.created.as_deref())),
            domain: metadata.and_then(|m| non_blank(m.domain.as_deref())),
            tags,
        }
    }

    /// Serializes the header as YAML and prepends it to `body`, delimited by `---` lines.
    pub fn render(&self, body: &str) -> Result<String, SummarizerError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!(
            "{FRONT_MATTER_DELIMITER}\n{yaml}{FRONT_MATTER_DELIMITER}\n\n{body}"
        ))
    }
}

/// Unions caller-supplied and generated tags.
///
/// Caller tags come first; each tag is kept once, at its first position. Blank tags
/// are dropped and surrounding whitespace is trimmed.
pub fn merge_tags(caller_tags: &[String], generated_tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    caller_tags
        .iter()
        .chain(generated_tags)
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_string()))
        .map(String::from)
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
