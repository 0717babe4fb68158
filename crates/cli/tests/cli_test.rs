//! # CLI Tests
//!
//! Runs the `vidsum` binary against a mock Vertex AI endpoint and checks its stdout,
//! stderr and exit codes.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=abc123";

/// Builds a command isolated from the caller's environment and `.env` files.
fn vidsum(server: &MockServer, project_id: Option<&str>) -> (Command, TempDir) {
    let workdir = tempdir().expect("Failed to create temp dir");
    let mut cmd = Command::cargo_bin("vidsum").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env_remove("VERTEX_MODEL")
        .env_remove("GOOGLE_CLOUD_PROJECT_ID")
        .env_remove("GOOGLE_CLOUD_LOCATION")
        .env_remove("GOOGLE_CLOUD_ACCESS_TOKEN")
        .env("VERTEX_API_URL", server.uri());
    if let Some(project_id) = project_id {
        cmd.env("GOOGLE_CLOUD_PROJECT_ID", project_id);
    }
    (cmd, workdir)
}

/// Runs the command off the async runtime so the mock server keeps serving.
async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to run vidsum"))
        .await
        .unwrap()
}

fn model_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    }))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_summarize_prints_json_result() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(
            r"^/v1/projects/test-project/locations/us-central1/publishers/google/models/gemini-1\.5-flash-002:generateContent$",
        ))
        .respond_with(model_reply(
            "```json\n[\"rust\", \"cli\"]\n```\n# 📹 Building CLIs\nSummary body.",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (mut cmd, _workdir) = vidsum(&server, Some("test-project"));
    cmd.arg(VIDEO_URL)
        .arg("--metadata")
        .arg(r#"{"title": "Building CLIs", "tags": ["rust", "tools"], "domain": "youtube.com"}"#);

    // Act
    let output = run(cmd).await;

    // Assert
    output.clone().assert().success();
    let result: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(result["generated_tags"], json!(["rust", "cli"]));
    assert_eq!(result["front_matter"]["title"], "Building CLIs");
    assert_eq!(result["front_matter"]["platform"], "YouTube");
    assert_eq!(result["front_matter"]["video_id"], "abc123");
    assert_eq!(result["front_matter"]["domain"], "youtube.com");
    assert_eq!(result["front_matter"]["tags"], json!(["rust", "tools", "cli"]));

    let summary = result["summary"].as_str().unwrap();
    assert!(summary.starts_with("---\ntitle: Building CLIs\n"));
    assert!(summary.ends_with("---\n\n# 📹 Building CLIs\nSummary body."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_model_flag_selects_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"/models/gemini-2\.0-flash:generateContent$"))
        .respond_with(model_reply("Short summary."))
        .expect(1)
        .mount(&server)
        .await;

    let (mut cmd, _workdir) = vidsum(&server, Some("test-project"));
    cmd.arg("https://vimeo.com/998877")
        .arg("--model")
        .arg("gemini-2.0-flash");

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("\"video_id\": \"998877\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_project_id_fails_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(model_reply("unused"))
        .expect(0)
        .mount(&server)
        .await;

    let (mut cmd, _workdir) = vidsum(&server, None);
    cmd.arg(VIDEO_URL);

    run(cmd)
        .await
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("GOOGLE_CLOUD_PROJECT_ID"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_metadata_fails_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(model_reply("unused"))
        .expect(0)
        .mount(&server)
        .await;

    let (mut cmd, _workdir) = vidsum(&server, Some("test-project"));
    cmd.arg(VIDEO_URL).arg("--metadata").arg("{not json");

    run(cmd)
        .await
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid metadata JSON"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_failure_is_processing_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let (mut cmd, _workdir) = vidsum(&server, Some("test-project"));
    cmd.arg(VIDEO_URL);

    run(cmd)
        .await
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Processing error"))
        .stderr(predicate::str::contains(VIDEO_URL))
        .stderr(predicate::str::contains("backend unavailable"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_response_is_processing_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(model_reply("  "))
        .mount(&server)
        .await;

    let (mut cmd, _workdir) = vidsum(&server, Some("test-project"));
    cmd.arg(VIDEO_URL);

    run(cmd)
        .await
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Processing error"))
        .stderr(predicate::str::contains("empty response"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unsupported_url_warns_but_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(model_reply("A talk."))
        .mount(&server)
        .await;

    let (mut cmd, _workdir) = vidsum(&server, Some("test-project"));
    cmd.arg("https://example.com/talk.mp4");

    run(cmd)
        .await
        .assert()
        .success()
        .stderr(predicate::str::contains("may not be from a supported platform"))
        .stdout(predicate::str::contains("\"platform\": \"Unknown\""));
}
