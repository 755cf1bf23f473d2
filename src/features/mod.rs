//! Feature vector model: the eight measurements describing one scoring request.

mod bounds;
mod describe;

pub use bounds::{FeatureBound, FEATURE_BOUNDS};

use crate::error::PredictionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
        WeatherCondition::Fog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Fog => "Fog",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| PredictionError::InvalidInput(format!("unknown weather condition: {}", s)))
    }
}

/// Feature vector submitted for scoring. Numeric fields are only trusted after [`PredictionInput::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    pub num_vehicles: i64,
    pub num_injuries: i64,
    pub poi_count: i64,
    /// Degrees Celsius
    pub temperature: i64,
    /// Residents per km²
    pub population_density: i64,
    /// Index on a 0-100 scale
    pub income_level: i64,
    pub school_count: i64,
    pub weather_condition: WeatherCondition,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            num_vehicles: 500,
            num_injuries: 5,
            poi_count: 10,
            temperature: 25,
            population_density: 3000,
            income_level: 50,
            school_count: 3,
            weather_condition: WeatherCondition::Clear,
        }
    }
}

impl PredictionInput {
    /// Parse a feature vector sent by the view layer as JSON.
    pub fn from_json(data: &str) -> Result<Self, PredictionError> {
        serde_json::from_str(data).map_err(|e| PredictionError::InvalidInput(e.to_string()))
    }

    pub fn get(&self, field: InputField) -> i64 {
        match field {
            InputField::NumVehicles => self.num_vehicles,
            InputField::NumInjuries => self.num_injuries,
            InputField::PoiCount => self.poi_count,
            InputField::Temperature => self.temperature,
            InputField::PopulationDensity => self.population_density,
            InputField::IncomeLevel => self.income_level,
            InputField::SchoolCount => self.school_count,
        }
    }

    fn slot_mut(&mut self, field: InputField) -> &mut i64 {
        match field {
            InputField::NumVehicles => &mut self.num_vehicles,
            InputField::NumInjuries => &mut self.num_injuries,
            InputField::PoiCount => &mut self.poi_count,
            InputField::Temperature => &mut self.temperature,
            InputField::PopulationDensity => &mut self.population_density,
            InputField::IncomeLevel => &mut self.income_level,
            InputField::SchoolCount => &mut self.school_count,
        }
    }

    /// Apply a single-field edit in place. No range checks here.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Numeric(field, value) => *self.slot_mut(field) = value,
            FieldUpdate::Weather(w) => self.weather_condition = w,
        }
    }
}

/// Numeric feature names, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    NumVehicles,
    NumInjuries,
    PoiCount,
    Temperature,
    PopulationDensity,
    IncomeLevel,
    SchoolCount,
}

impl InputField {
    /// Wire name used by the view layer
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::NumVehicles => "numVehicles",
            InputField::NumInjuries => "numInjuries",
            InputField::PoiCount => "poiCount",
            InputField::Temperature => "temperature",
            InputField::PopulationDensity => "populationDensity",
            InputField::IncomeLevel => "incomeLevel",
            InputField::SchoolCount => "schoolCount",
        }
    }
}

impl FromStr for InputField {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FEATURE_BOUNDS
            .iter()
            .map(|b| b.field)
            .find(|f| f.as_str() == s)
            .ok_or_else(|| PredictionError::InvalidInput(format!("unknown field: {}", s)))
    }
}

/// One edit coming from an input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Numeric(InputField, i64),
    Weather(WeatherCondition),
}

impl FieldUpdate {
    /// Build an edit from a widget's field name and raw string value.
    pub fn parse(name: &str, value: &str) -> Result<Self, PredictionError> {
        if name == "weatherCondition" {
            return Ok(FieldUpdate::Weather(value.parse()?));
        }
        let field: InputField = name.parse()?;
        let v = value.trim().parse::<i64>().map_err(|e| {
            PredictionError::InvalidInput(format!("{}: {}", field.as_str(), e))
        })?;
        Ok(FieldUpdate::Numeric(field, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn weather_parses_only_known_names() {
        assert_eq!("Fog".parse::<WeatherCondition>().unwrap(), WeatherCondition::Fog);
        let err = "Hail".parse::<WeatherCondition>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn from_json_uses_camel_case_and_rejects_bad_weather() {
        let ok = PredictionInput::from_json(
            r#"{"numVehicles":1,"numInjuries":2,"poiCount":3,"temperature":-4,
                "populationDensity":5,"incomeLevel":6,"schoolCount":7,"weatherCondition":"Snow"}"#,
        )
        .unwrap();
        assert_eq!(ok.temperature, -4);
        assert_eq!(ok.weather_condition, WeatherCondition::Snow);

        let err = PredictionInput::from_json(
            r#"{"numVehicles":1,"numInjuries":2,"poiCount":3,"temperature":-4,
                "populationDensity":5,"incomeLevel":6,"schoolCount":7,"weatherCondition":"Hail"}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn field_update_parse_and_apply() {
        let mut input = PredictionInput::default();
        input.apply(FieldUpdate::parse("schoolCount", "12").unwrap());
        input.apply(FieldUpdate::parse("weatherCondition", "Rain").unwrap());
        assert_eq!(input.school_count, 12);
        assert_eq!(input.weather_condition, WeatherCondition::Rain);

        assert!(FieldUpdate::parse("speedLimit", "50").is_err());
        assert!(FieldUpdate::parse("poiCount", "many").is_err());
    }
}
