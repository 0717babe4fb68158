//! # Configuration
//!
//! Settings for reaching Vertex AI, read from the process environment (after loading a
//! `.env` file, if present). Configuration is resolved before any network call, so a
//! missing project id fails fast.

use crate::errors::SummarizerError;
use std::env;
use tracing::info;

/// The Gemini model used when none is given.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-002";
/// The Vertex AI region used when none is given.
pub const DEFAULT_LOCATION: &str = "us-central1";

pub const PROJECT_ID_ENV: &str = "GOOGLE_CLOUD_PROJECT_ID";
pub const LOCATION_ENV: &str = "GOOGLE_CLOUD_LOCATION";
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_CLOUD_ACCESS_TOKEN";
pub const API_URL_ENV: &str = "VERTEX_API_URL";

/// Resolved Vertex AI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_id: String,
    pub location: String,
    /// Bearer token sent with each request, if any.
    pub access_token: Option<String>,
    /// Overrides the regional `https://{location}-aiplatform.googleapis.com` endpoint.
    pub api_base_url: Option<String>,
}

impl Config {
    /// Loads `.env` and reads the configuration from the environment.
    pub fn from_env() -> Result<Self, SummarizerError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let project_id = get(PROJECT_ID_ENV).ok_or_else(|| {
            SummarizerError::Configuration(format!(
                "{PROJECT_ID_ENV} environment variable is required. Please set it in your .env file."
            ))
        })?;

        Ok(Self {
            project_id,
            location: get(LOCATION_ENV).unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            access_token: get(ACCESS_TOKEN_ENV),
            api_base_url: get(API_URL_ENV),
        })
    }

    /// Replaces the region, ignoring blank values.
    pub fn with_location(mut self, location: Option<String>) -> Self {
        if let Some(location) = location.filter(|l| !l.trim().is_empty()) {
            self.location = location.trim().to_string();
        }
        self
    }

    /// The base URL requests are sent to.
    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}-aiplatform.googleapis.com", self.location),
        }
    }

    /// The full `generateContent` URL for `model`.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!(
            "{base}/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:generateContent",
            base = self.api_base_url(),
            project = self.project_id,
            location = self.location,
        )
    }
}
