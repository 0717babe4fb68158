//! # Video Platforms
//!
//! Detection of the hosting platform from a video URL and extraction of the
//! platform-specific video identifier.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domains for which summaries are known to work. Other URLs are still processed.
pub const SUPPORTED_DOMAINS: &[&str] = &["youtube.com", "youtu.be", "vimeo.com"];

/// Patterns tried in order by `extract_video_id`. The first capture group is the id.
const VIDEO_ID_PATTERNS: &[&str] = &[
    r"(?:https?://)?(?:www\.)?(?:m\.)?youtube\.com/watch\?v=([^&\n?#]+)",
    r"(?:https?://)?(?:www\.)?youtu\.be/([^&\n?#]+)",
    r"(?:https?://)?(?:www\.)?youtube\.com/embed/([^&\n?#]+)",
    r"(?:https?://)?(?:www\.)?vimeo\.com/(\d+)",
];

/// The video-hosting service a URL points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    Vimeo,
    TikTok,
    Twitch,
    Dailymotion,
    #[serde(rename = "TED")]
    Ted,
    Unknown,
}

impl Platform {
    /// Detects the platform by case-insensitive substring match on the URL.
    pub fn detect(url: &str) -> Self {
        let url = url.to_lowercase();
        let known: [(&[&str], Platform); 6] = [
            (&["youtube.com", "youtu.be"], Platform::YouTube),
            (&["vimeo.com"], Platform::Vimeo),
            (&["tiktok.com"], Platform::TikTok),
            (&["twitch.tv"], Platform::Twitch),
            (&["dailymotion.com"], Platform::Dailymotion),
            (&["ted.com"], Platform::Ted),
        ];

        known
            .iter()
            .find(|(domains, _)| domains.iter().any(|d| url.contains(d)))
            .map(|(_, platform)| *platform)
            .unwrap_or(Platform::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Vimeo => "Vimeo",
            Platform::TikTok => "TikTok",
            Platform::Twitch => "Twitch",
            Platform::Dailymotion => "Dailymotion",
            Platform::Ted => "TED",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if the URL belongs to one of the `SUPPORTED_DOMAINS`.
pub fn is_supported_url(url: &str) -> bool {
    let url = url.to_lowercase();
    SUPPORTED_DOMAINS.iter().any(|domain| url.contains(domain))
}

/// Extracts the video id from YouTube (watch, short link, embed) and Vimeo URLs.
///
/// Returns `None` when no known URL shape matches.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS.iter().find_map(|pattern| {
        let re = Regex::new(pattern).ok()?;
        re.captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
