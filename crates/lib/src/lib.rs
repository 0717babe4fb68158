//! # Video Summarizer
//!
//! This crate asks a generative AI model to summarize a video and tag it, then turns the
//! model's free-form answer into a markdown summary with a YAML front matter header.
//!
//! The flow for one video:
//!
//! 1. [`VideoSummarizer::build_request`] detects the platform and renders the prompt.
//! 2. The configured [`AiProvider`] is called once with the prompt and the video URL.
//! 3. [`interpret::interpret_response`] separates the embedded tag list from the summary
//!    and assembles the front matter.

pub mod config;
pub mod errors;
pub mod front_matter;
pub mod interpret;
pub mod logging;
pub mod platform;
pub mod prompts;
pub mod providers;
pub mod types;

pub use config::Config;
pub use errors::SummarizerError;
pub use front_matter::FrontMatter;
pub use platform::Platform;
pub use providers::ai::AiProvider;
pub use types::{MediaRef, SummaryRequest, SummaryResult, VideoMetadata};

use chrono::{DateTime, Utc};
use platform::{is_supported_url, SUPPORTED_DOMAINS};
use prompts::{build_prompt, PromptVars};
use tracing::{info, warn};

/// Summarizes videos through an AI provider.
#[derive(Debug, Clone)]
pub struct VideoSummarizer {
    ai_provider: Box<dyn AiProvider>,
}

/// A builder for creating `VideoSummarizer` instances.
#[derive(Default)]
pub struct VideoSummarizerBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl VideoSummarizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used to generate summaries.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `VideoSummarizer`, failing if no provider was set.
    pub fn build(self) -> Result<VideoSummarizer, SummarizerError> {
        let ai_provider = self.ai_provider.ok_or_else(|| {
            SummarizerError::Configuration("An AI provider is required".to_string())
        })?;
        Ok(VideoSummarizer { ai_provider })
    }
}

impl VideoSummarizer {
    pub fn builder() -> VideoSummarizerBuilder {
        VideoSummarizerBuilder::new()
    }

    /// Builds the request for a video.
    ///
    /// URLs outside the supported platforms only produce a warning; the request is
    /// built regardless.
    pub fn build_request(
        &self,
        video_url: &str,
        metadata: Option<VideoMetadata>,
        now: DateTime<Utc>,
    ) -> SummaryRequest {
        if !is_supported_url(video_url) {
            warn!(
                "URL may not be from a supported platform. Supported: {}",
                SUPPORTED_DOMAINS.join(", ")
            );
        }

        let platform = Platform::detect(video_url);
        let current_date = now.format("%Y-%m-%d").to_string();
        let prompt = build_prompt(&PromptVars {
            video_url,
            current_date: &current_date,
            platform,
        });

        SummaryRequest {
            video_url: video_url.to_string(),
            platform,
            prompt,
            media: MediaRef::video(video_url),
            metadata,
        }
    }

    /// Generates the summary for a video.
    ///
    /// Any failure, including an empty model response, is reported as
    /// `SummarizerError::Processing` naming the video; no partial result is returned.
    pub async fn summarize(
        &self,
        video_url: &str,
        metadata: Option<VideoMetadata>,
    ) -> Result<SummaryResult, SummarizerError> {
        let request = self.build_request(video_url, metadata, Utc::now());
        self.execute(&request)
            .await
            .map_err(|e| SummarizerError::processing(video_url, e))
    }

    /// Sends a prepared request to the provider and interprets the response.
    pub async fn execute(&self, request: &SummaryRequest) -> Result<SummaryResult, SummarizerError> {
        info!("Generating summary and tags for: {}", request.video_url);

        let response = self
            .ai_provider
            .generate(&request.prompt, &request.media)
            .await?;

        if response.trim().is_empty() {
            return Err(SummarizerError::EmptyResponse);
        }

        interpret::interpret_response(
            &response,
            &request.video_url,
            request.metadata.as_ref(),
            Utc::now(),
        )
    }
}
