use thiserror::Error;

/// Custom error types for the summarizer.
#[derive(Error, Debug)]
pub enum SummarizerError {
    /// A required configuration value is missing or empty.
    #[error("{0}")]
    Configuration(String),
    #[error("Invalid metadata JSON: {0}")]
    InvalidMetadata(#[source] serde_json::Error),
    /// Summary generation failed for the given video. Wraps the underlying cause.
    #[error("Failed to generate summary for '{url}': {source}")]
    Processing {
        url: String,
        #[source]
        source: Box<SummarizerError>,
    },
    #[error("Received empty response from model")]
    EmptyResponse,
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to Vertex AI: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize Vertex AI response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("Vertex AI returned an error ({status}): {body}")]
    AiApi { status: u16, body: String },
    #[error("Failed to serialize front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

impl SummarizerError {
    /// Wraps any error raised while generating a summary into a `Processing` error
    /// for the given video. An existing `Processing` error is returned unchanged.
    pub fn processing(url: &str, source: SummarizerError) -> Self {
        match source {
            processing @ SummarizerError::Processing { .. } => processing,
            other => SummarizerError::Processing {
                url: url.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Returns `true` for errors caused by missing configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SummarizerError::Configuration(_))
    }
}
