//! Thin client for the Gemini `generateContent` REST API, shared by the
//! catalog refresh and document advice collaborators.

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Failure modes shared by the enrichment collaborators. These never escape
/// to eligibility evaluation; callers fall back to static data instead.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("enrichment transport failed: {0}")]
    Transport(String),
    #[error("enrichment returned a malformed payload: {0}")]
    Malformed(String),
}

/// One generated reply plus the grounding URLs the model cited.
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub text: String,
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Point at a different endpoint, e.g. a local stub during testing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// One round-trip to `generateContent`. `grounded` enables Google-Search
    /// grounding; `json_output` requests a JSON reply body.
    pub async fn generate(
        &self,
        prompt: &str,
        grounded: bool,
        json_output: bool,
    ) -> Result<GeneratedText, FeedError> {
        let Some(api_key) = &self.api_key else {
            return Err(FeedError::MissingCredential);
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            tools: if grounded {
                vec![Tool {
                    google_search: GoogleSearch {},
                }]
            } else {
                Vec::new()
            },
            generation_config: json_output.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Transport(format!(
                "generateContent returned {status}"
            )));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|err| FeedError::Malformed(err.to_string()))?;

        let candidate = payload
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::Malformed("response carried no candidates".to_string()))?;

        let text = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        let source_urls = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web.and_then(|web| web.uri))
                    .collect()
            })
            .unwrap_or_default();

        Ok(GeneratedText { text, source_urls })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: CandidateContent,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    #[serde(default)]
    uri: Option<String>,
}
