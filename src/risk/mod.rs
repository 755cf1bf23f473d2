//! Risk verdict returned by the scoring service, and its strict wire contract.

mod verdict;

pub use verdict::{parse_verdict, PredictionResult, RiskLevel, PROBABILITY_RANGE};
