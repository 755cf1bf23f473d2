//! Remote scoring service: the generative model asked to behave like a risk classifier.
//!
//! - [`ScoringService`] — the one async operation the core depends on
//! - [`GeminiScorer`] — HTTP implementation against the Gemini `generateContent` API
//! - [`schema`] — system instruction and the enforced output schema

mod gemini;
pub mod schema;

pub use gemini::GeminiScorer;

use crate::error::PredictionError;
use std::future::Future;

/// Everything the remote model receives for one prediction.
#[derive(Debug, Clone)]
pub struct ScoringRequest {
    /// Natural-language description of the feature vector
    pub prompt: String,
    /// Persona and output rules
    pub system_instruction: String,
    /// Structured-output schema the model is constrained to
    pub response_schema: serde_json::Value,
}

impl ScoringRequest {
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            system_instruction: schema::SYSTEM_INSTRUCTION.to_string(),
            response_schema: schema::response_schema(),
        }
    }
}

/// Opaque remote scorer. Returns the raw payload text; validation is the caller's job.
pub trait ScoringService {
    fn generate(
        &self,
        request: &ScoringRequest,
    ) -> impl Future<Output = Result<String, PredictionError>> + Send;
}
