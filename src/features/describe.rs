//! Natural-language rendering of a feature vector for the model query.

use super::{PredictionInput, FEATURE_BOUNDS};
use std::fmt::Write;

const PREAMBLE: &str =
    "Analyze the following traffic and environmental data to predict the accident risk.";

impl PredictionInput {
    /// One labelled line per feature, fixed order, literal values.
    pub fn describe(&self) -> String {
        let mut out = String::with_capacity(512);
        out.push_str(PREAMBLE);
        out.push('\n');
        for bound in &FEATURE_BOUNDS {
            let _ = writeln!(out, "- {}: {}", bound.label, self.get(bound.field));
        }
        let _ = writeln!(out, "- Weather Condition: {}", self.weather_condition);
        out
    }
}
