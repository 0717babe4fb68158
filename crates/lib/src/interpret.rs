//! # Response Interpretation
//!
//! Turns the model's free-form text into a `SummaryResult`: an embedded JSON tag list
//! is located and removed from the text, the remainder becomes the summary body, and a
//! front matter header is prepended.
//!
//! Tag extraction is an ordered chain of locators. Every locator is total: it either
//! finds a candidate or it doesn't, and a candidate that fails to parse is skipped
//! with a warning. The first candidate that parses wins.

use crate::{
    errors::SummarizerError,
    front_matter::{merge_tags, FrontMatter},
    platform::{extract_video_id, Platform},
    types::{SummaryResult, VideoMetadata},
};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::ops::Range;
use tracing::{debug, warn};

/// A code block opened by a ```` ```json ```` line and holding an array. May span lines.
const FENCED_ARRAY_PATTERN: &str = r"(?ms)^```json\s*(\[.*?\])\s*```";
/// The first bracketed run on a single line.
const INLINE_ARRAY_PATTERN: &str = r"\[.*?\]";

/// Tags found in a response and the text left once they are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTags {
    pub tags: Vec<String>,
    pub body: String,
}

/// Where a tag list may be embedded in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagLocator {
    FencedBlock,
    InlineArray,
}

/// A possible tag list: the JSON to parse and the span to cut out if it parses.
struct Candidate<'a> {
    json: &'a str,
    span: Range<usize>,
}

impl TagLocator {
    const CHAIN: [TagLocator; 2] = [TagLocator::FencedBlock, TagLocator::InlineArray];

    fn describe(&self) -> &'static str {
        match self {
            TagLocator::FencedBlock => "JSON code block",
            TagLocator::InlineArray => "inline JSON array",
        }
    }

    fn locate<'a>(&self, text: &'a str) -> Option<Candidate<'a>> {
        match self {
            TagLocator::FencedBlock => {
                let re = Regex::new(FENCED_ARRAY_PATTERN).ok()?;
                let caps = re.captures(text)?;
                let block = caps.get(0)?;
                let array = caps.get(1)?;
                Some(Candidate {
                    json: array.as_str(),
                    span: block.range(),
                })
            }
            TagLocator::InlineArray => {
                let re = Regex::new(INLINE_ARRAY_PATTERN).ok()?;
                let array = re.find(text)?;
                Some(Candidate {
                    json: array.as_str(),
                    span: array.range(),
                })
            }
        }
    }
}

/// Parses a candidate as a JSON array of strings.
///
/// An empty inline array is not treated as a tag list, so markdown such as
/// `- [ ] item` is left in place. An empty fenced array is still removed.
fn parse_tag_list(locator: TagLocator, json: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Vec<String>>(json) {
        Ok(tags) if tags.is_empty() && locator == TagLocator::InlineArray => {
            debug!("Ignoring empty {}", locator.describe());
            None
        }
        Ok(tags) => Some(tags),
        Err(e) => {
            warn!(
                "Could not parse generated tags from {}: {e}",
                locator.describe()
            );
            None
        }
    }
}

/// Separates an embedded tag list from the summary text.
///
/// When no locator yields a parsable list, the tags are empty and the body is the
/// trimmed input, unchanged.
pub fn extract_tags(response_text: &str) -> ExtractedTags {
    let text = response_text.trim();

    for locator in TagLocator::CHAIN {
        let Some(candidate) = locator.locate(text) else {
            continue;
        };
        if let Some(tags) = parse_tag_list(locator, candidate.json) {
            debug!(count = tags.len(), "Extracted tags from {}", locator.describe());
            let mut body = String::with_capacity(text.len());
            body.push_str(&text[..candidate.span.start]);
            body.push_str(&text[candidate.span.end..]);
            return ExtractedTags {
                tags,
                body: body.trim().to_string(),
            };
        }
    }

    ExtractedTags {
        tags: Vec::new(),
        body: text.to_string(),
    }
}

/// Builds the final result from a raw model response.
pub fn interpret_response(
    response_text: &str,
    video_url: &str,
    metadata: Option<&VideoMetadata>,
    generated_at: DateTime<Utc>,
) -> Result<SummaryResult, SummarizerError> {
    let ExtractedTags { tags, body } = extract_tags(response_text);

    let caller_tags = metadata.map(|m| m.tags.as_slice()).unwrap_or_default();
    let all_tags = merge_tags(caller_tags, &tags);

    let front_matter = FrontMatter::new(
        video_url,
        Platform::detect(video_url),
        extract_video_id(video_url),
        metadata,
        all_tags,
        generated_at,
    );
    let summary = front_matter.render(&body)?;

    Ok(SummaryResult {
        summary,
        generated_tags: tags,
        front_matter,
    })
}
