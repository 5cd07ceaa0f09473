use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// The single seam between the handlers and the hosted model. One outbound
/// call per invocation; no retry, no caching, no streaming.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Pluggable credential source. Tokens never live in code; the default
/// implementation reads the environment at call time.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> AppResult<SecretString>;
}

pub struct EnvAccessTokenProvider;

#[async_trait]
impl AccessTokenProvider for EnvAccessTokenProvider {
    async fn access_token(&self) -> AppResult<SecretString> {
        std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN")
            .map(SecretString::from)
            .map_err(|_| {
                AppError::Configuration(
                    "GOOGLE_OAUTH_ACCESS_TOKEN environment variable is not set".to_string(),
                )
            })
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: RequestContent,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Safety ratings for the prompt; carried but not consumed.
    #[serde(rename = "promptFeedback", default)]
    _prompt_feedback: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason", default)]
    _finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Calls the Vertex AI `generateContent` endpoint and extracts the first
/// candidate's first text part.
pub struct VertexAiClient {
    http: reqwest::Client,
    config: Arc<Config>,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl VertexAiClient {
    pub fn new(config: Arc<Config>, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    fn endpoint(&self, project: &str) -> String {
        let location = &self.config.google_cloud_location;
        format!(
            "https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:generateContent",
            model = self.config.model_id,
        )
    }
}

#[async_trait]
impl ModelClient for VertexAiClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let project = self.config.google_cloud_project.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "GOOGLE_CLOUD_PROJECT environment variable is not set".to_string(),
            )
        })?;
        if self.config.google_application_credentials.is_none() {
            return Err(AppError::Configuration(
                "GOOGLE_APPLICATION_CREDENTIALS environment variable is not set".to_string(),
            ));
        }

        let token = self.tokens.access_token().await?;

        let request_body = GenerateContentRequest {
            contents: RequestContent {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            },
        };

        log::info!(
            "calling model {} ({} prompt bytes)",
            self.config.model_id,
            prompt.len()
        );

        let response = self
            .http
            .post(self.endpoint(project))
            .bearer_auth(token.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: Some(status.as_u16()),
                message: format!("Vertex AI API error: {} {}", status.as_u16(), body),
            });
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            AppError::Upstream {
                status: None,
                message: format!("Failed to decode model response: {}", err),
            }
        })?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::Upstream {
                status: None,
                message: "No response generated from Vertex AI".to_string(),
            })
    }
}
