//! # vidsum: Summarize a Video with Vertex AI
//!
//! A thin entrypoint: all logic lives in the `vidsum_cli` library crate.

use clap::Parser;
use std::process::ExitCode;
use tracing::instrument::WithSubscriber;
use vidsum::logging::LogConfig;
use vidsum_cli::{execute, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Parse CLI arguments
    let cli = Cli::parse();

    // 2. Scope logging to this run; stdout is reserved for the JSON result
    let dispatch = LogConfig::stderr(cli.verbose).into_dispatch();

    // 3. Run and map the outcome to an exit code
    execute(cli).with_subscriber(dispatch).await
}
