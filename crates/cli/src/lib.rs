//! # `vidsum` CLI Library Crate
//!
//! Argument parsing, configuration resolution and error reporting for the `vidsum`
//! binary. The summarization itself lives in the `vidsum` library.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use vidsum::{
    config::DEFAULT_MODEL, providers::ai::VertexProvider, Config, SummarizerError, SummaryResult,
    VideoMetadata, VideoSummarizer,
};

/// Exit status for configuration, processing and unexpected errors.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status when the user interrupts the run.
pub const EXIT_CANCELLED: u8 = 130;

// --- CLI Argument Struct ---

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "Summarize a video using Vertex AI Gemini.")]
#[command(after_help = "Examples:\n  \
    vidsum \"https://www.youtube.com/watch?v=dQw4w9WgXcQ\"\n  \
    vidsum \"https://youtu.be/dQw4w9WgXcQ\" --verbose")]
pub struct Cli {
    /// The full URL of the video to summarize
    pub video_url: String,
    /// JSON string containing bookmark metadata (title, tags, created, domain)
    #[arg(long)]
    pub metadata: Option<String>,
    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
    /// Gemini model to use
    #[arg(long, env = "VERTEX_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
    /// Vertex AI region. Falls back to GOOGLE_CLOUD_LOCATION, then us-central1.
    #[arg(long)]
    pub location: Option<String>,
}

// --- Public Entrypoints ---

/// Resolves configuration and metadata, then generates the summary.
///
/// Configuration and metadata are validated before any network call is made.
pub async fn summarize(cli: &Cli) -> Result<SummaryResult, SummarizerError> {
    let config = Config::from_env()?.with_location(cli.location.clone());

    let metadata = cli
        .metadata
        .as_deref()
        .map(VideoMetadata::from_json)
        .transpose()?;

    let provider = VertexProvider::from_config(&config, &cli.model)
        .map_err(|e| SummarizerError::processing(&cli.video_url, e))?;
    let summarizer = VideoSummarizer::builder()
        .ai_provider(Box::new(provider))
        .build()?;

    summarizer.summarize(&cli.video_url, metadata).await
}

/// Generates the summary and prints it to stdout as pretty JSON.
pub async fn run(cli: Cli) -> Result<()> {
    let result = summarize(&cli).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Runs the CLI to completion, reporting failures and mapping them to an exit code.
///
/// Ctrl-C abandons the in-flight request and exits with 130.
pub async fn execute(cli: Cli) -> ExitCode {
    tokio::select! {
        result = run(cli) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{}", describe_error(&e));
                ExitCode::from(EXIT_FAILURE)
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            info!("Operation cancelled by user");
            ExitCode::from(EXIT_CANCELLED)
        }
    }
}

/// Formats an error with the category the user sees.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<SummarizerError>() {
        Some(e @ SummarizerError::Configuration(_)) => format!("Configuration error: {e}"),
        Some(e @ SummarizerError::InvalidMetadata(_)) => e.to_string(),
        Some(e @ SummarizerError::Processing { .. }) => format!("Processing error: {e}"),
        _ => format!("Unexpected error: {err:#}"),
    }
}
