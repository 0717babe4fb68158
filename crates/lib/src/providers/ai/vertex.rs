use crate::{
    config::Config, errors::SummarizerError, providers::ai::AiProvider, types::MediaRef,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, info};

// --- Vertex AI request and response structures ---

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    File {
        #[serde(rename = "fileData")]
        file_data: FileData<'a>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileData<'a> {
    mime_type: &'a str,
    file_uri: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate. Missing content yields "".
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

// --- Vertex Provider implementation ---

/// A provider for Gemini models served through Google Cloud Vertex AI.
#[derive(Clone)]
pub struct VertexProvider {
    client: ReqwestClient,
    api_url: String,
    access_token: Option<String>,
}

impl Debug for VertexProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexProvider")
            .field("api_url", &self.api_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl VertexProvider {
    /// Creates a new `VertexProvider` posting to the full `generateContent` URL.
    pub fn new(api_url: String, access_token: Option<String>) -> Result<Self, SummarizerError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(SummarizerError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            access_token,
        })
    }

    /// Creates a provider for `model` from the resolved configuration.
    pub fn from_config(config: &Config, model: &str) -> Result<Self, SummarizerError> {
        let api_url = config.generate_content_url(model);
        info!(
            "Configuring Vertex AI provider for project '{}' in '{}' with model '{}'",
            config.project_id, config.location, model
        );
        Self::new(api_url, config.access_token.clone())
    }
}

#[async_trait]
impl AiProvider for VertexProvider {
    async fn generate(&self, prompt: &str, media: &MediaRef) -> Result<String, SummarizerError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::Text { text: prompt },
                    Part::File {
                        file_data: FileData {
                            mime_type: &media.mime_type,
                            file_uri: &media.uri,
                        },
                    },
                ],
            }],
        };

        debug!(api_url = %self.api_url, media = %media.uri, "--> Sending prompt to Vertex AI");

        let mut request_builder = self.client.post(&self.api_url);
        if let Some(token) = &self.access_token {
            request_builder = request_builder.bearer_auth(token);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(SummarizerError::AiRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::AiApi {
                status: status.as_u16(),
                body,
            });
        }

        let vertex_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(SummarizerError::AiDeserialization)?;

        let text = vertex_response.into_text();
        debug!("<-- Vertex AI response: {} bytes", text.len());
        Ok(text)
    }
}
