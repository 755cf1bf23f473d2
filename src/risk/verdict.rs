//! Validates the model's payload against the four-field verdict and clamps the probability.

use crate::error::PredictionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// riskProbability is a percentage.
pub const PROBABILITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub risk_level: RiskLevel,
    /// Percentage in [0, 100]
    pub risk_probability: f64,
    /// Expected in [0.0, 1.0]; passed through as reported
    pub confidence_score: f64,
    /// Opaque geographic cluster id
    pub cluster_assignment: u32,
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} risk, {:.2}% probability, confidence {:.2}, cluster #{}",
            self.risk_level, self.risk_probability, self.confidence_score, self.cluster_assignment
        )
    }
}

/// Exact payload shape the model is told to return.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct WireVerdict {
    risk_level: RiskLevel,
    risk_probability: f64,
    confidence_score: f64,
    cluster_assignment: u32,
}

/// Parse a raw model payload. Anything but the four required fields with the right types is rejected.
pub fn parse_verdict(raw: &str) -> Result<PredictionResult, PredictionError> {
    let wire: WireVerdict = serde_json::from_str(raw.trim())
        .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;
    Ok(PredictionResult {
        risk_level: wire.risk_level,
        risk_probability: wire
            .risk_probability
            .clamp(*PROBABILITY_RANGE.start(), *PROBABILITY_RANGE.end()),
        confidence_score: wire.confidence_score,
        cluster_assignment: wire.cluster_assignment,
    })
}
