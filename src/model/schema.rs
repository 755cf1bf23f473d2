//! Output contract handed to the model alongside every query.

use crate::risk::RiskLevel;
use serde_json::{json, Value};

pub const SYSTEM_INSTRUCTION: &str = "You are an AI simulating an XGBoost classifier for urban traffic accident risk prediction. \
Your task is to analyze the provided features and output a risk assessment in a structured JSON format. \
Do not provide any explanations or text outside of the JSON structure. \
The risk probability should be a percentage between 0 and 100. \
The confidence score should be between 0.0 and 1.0.";

pub const RESPONSE_MIME_TYPE: &str = "application/json";

pub const REQUIRED_FIELDS: [&str; 4] = [
    "riskLevel",
    "riskProbability",
    "confidenceScore",
    "clusterAssignment",
];

/// Schema in the Gemini structured-output dialect (OpenAPI subset, upper-case type names).
pub fn response_schema() -> Value {
    let levels: Vec<&str> = RiskLevel::ALL.iter().map(|l| l.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "riskLevel": {
                "type": "STRING",
                "enum": levels,
                "description": "The predicted risk level."
            },
            "riskProbability": {
                "type": "NUMBER",
                "description": "The probability of an accident occurring, as a percentage (0-100)."
            },
            "confidenceScore": {
                "type": "NUMBER",
                "description": "The model's confidence in the prediction (0.0-1.0)."
            },
            "clusterAssignment": {
                "type": "INTEGER",
                "description": "The assigned geographic risk cluster (e.g., 1, 2, or 3)."
            }
        },
        "required": REQUIRED_FIELDS,
    })
}
