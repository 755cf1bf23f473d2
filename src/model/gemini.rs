//! Gemini client: posts one `generateContent` call per prediction and returns the model's text.

use super::schema::RESPONSE_MIME_TYPE;
use super::{ScoringRequest, ScoringService};
use crate::config::ScoringConfig;
use crate::error::PredictionError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body for `models/{model}:generateContent`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: [Content<'a>; 1],
    system_instruction: Instruction<'a>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct Instruction<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

fn build_body(request: &ScoringRequest) -> GenerateContentBody<'_> {
    GenerateContentBody {
        contents: [Content {
            role: "user",
            parts: [TextPart { text: &request.prompt }],
        }],
        system_instruction: Instruction {
            parts: [TextPart { text: &request.system_instruction }],
        },
        generation_config: GenerationConfig {
            response_mime_type: RESPONSE_MIME_TYPE,
            response_schema: &request.response_schema,
        },
    }
}

pub struct GeminiScorer {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiScorer {
    pub fn new(config: &ScoringConfig, api_key: impl Into<String>) -> Result<Self, PredictionError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
        })
    }

    /// Build from config, reading the API key from the env var it names.
    pub fn from_config(config: &ScoringConfig) -> Result<Self, PredictionError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            PredictionError::Transport(format!("missing API key: ${} is not set", config.api_key_env))
        })?;
        Self::new(config, api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl ScoringService for GeminiScorer {
    async fn generate(&self, request: &ScoringRequest) -> Result<String, PredictionError> {
        let url = self.url();
        debug!(%url, "calling scoring service");
        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_body(request))
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(PredictionError::Transport(format!("{} {}", status, text)));
        }
        let envelope: GenerateContentResponse = res
            .json()
            .await
            .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;
        envelope
            .into_text()
            .ok_or_else(|| PredictionError::MalformedResponse("response contained no text".to_string()))
    }
}
