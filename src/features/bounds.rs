//! Declared domain of each numeric feature, and clamping into it.

use super::{InputField, PredictionInput};

#[derive(Debug, Clone, Copy)]
pub struct FeatureBound {
    pub field: InputField,
    /// Human-readable label used in the model query
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
}

impl FeatureBound {
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Numeric features in fixed prompt order. Weather is appended last by the describer.
pub const FEATURE_BOUNDS: [FeatureBound; 7] = [
    FeatureBound { field: InputField::NumVehicles, label: "Number of Vehicles", min: 0, max: 1000 },
    FeatureBound { field: InputField::NumInjuries, label: "Number of Injuries", min: 0, max: 100 },
    FeatureBound { field: InputField::PoiCount, label: "Points of Interest (POIs) nearby", min: 0, max: 50 },
    FeatureBound { field: InputField::Temperature, label: "Temperature (°C)", min: -10, max: 50 },
    FeatureBound { field: InputField::PopulationDensity, label: "Population Density (per km²)", min: 0, max: 10000 },
    FeatureBound { field: InputField::IncomeLevel, label: "Average Income Level (0-100 scale)", min: 0, max: 100 },
    FeatureBound { field: InputField::SchoolCount, label: "Number of Schools nearby", min: 0, max: 20 },
];

impl PredictionInput {
    /// Clamp every numeric field into its declared domain.
    pub fn normalize(&self) -> PredictionInput {
        let mut out = self.clone();
        for bound in &FEATURE_BOUNDS {
            let v = bound.clamp(self.get(bound.field));
            *out.slot_mut(bound.field) = v;
        }
        out
    }

    pub fn is_within_bounds(&self) -> bool {
        FEATURE_BOUNDS.iter().all(|b| b.contains(self.get(b.field)))
    }
}
