//! Prediction client: feature vector in, validated verdict out.
//!
//! Pipeline: normalize → describe → schema-constrained query → strict parse → clamp.
//! Failures are reported once and never retried here.

use crate::error::PredictionError;
use crate::features::PredictionInput;
use crate::model::{ScoringRequest, ScoringService};
use crate::risk::{parse_verdict, PredictionResult};
use tracing::{debug, info, warn};

pub struct PredictionClient<S> {
    service: S,
}

impl<S: ScoringService> PredictionClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Query for one input without sending it.
    pub fn build_request(&self, input: &PredictionInput) -> ScoringRequest {
        ScoringRequest::new(input.normalize().describe())
    }

    pub async fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, PredictionError> {
        if !input.is_within_bounds() {
            debug!(?input, "input outside declared domain; clamping");
        }
        let request = self.build_request(input);
        let outcome = self
            .service
            .generate(&request)
            .await
            .and_then(|raw| parse_verdict(&raw));
        match &outcome {
            Ok(result) => info!(
                risk_level = %result.risk_level,
                risk_probability = result.risk_probability,
                confidence = result.confidence_score,
                cluster = result.cluster_assignment,
                "prediction complete"
            ),
            Err(e) => warn!(kind = e.kind().as_str(), error = %e, "prediction failed"),
        }
        outcome
    }
}
