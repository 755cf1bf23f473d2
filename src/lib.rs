//! Traffic risk core: turns eight traffic/urban features into a schema-enforced model query,
//! validates the verdict, and keeps a bounded history.
//!
//! Modular structure:
//! - [`config`] — JSON configuration with defaults
//! - [`error`] — Uniform prediction failure and its kind
//! - [`features`] — Feature vector, field edits, normalization and prompt rendering
//! - [`risk`] — Verdict types and strict payload validation
//! - [`model`] — Remote scoring service seam and Gemini client
//! - [`client`] — Prediction client (normalize → query → parse → clamp)
//! - [`history`] — Bounded newest-first ledger
//! - [`controller`] — Interaction controller used by the view layer
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod features;
pub mod risk;
pub mod model;
pub mod client;
pub mod history;
pub mod controller;
pub mod logging;

pub use config::AppConfig;
pub use error::{ErrorKind, PredictionError};
pub use features::{FieldUpdate, InputField, PredictionInput, WeatherCondition};
pub use risk::{PredictionResult, RiskLevel};
pub use model::{GeminiScorer, ScoringRequest, ScoringService};
pub use client::PredictionClient;
pub use history::{HistoryLedger, PredictionHistoryItem};
pub use controller::{ControllerSnapshot, InteractionController};
pub use logging::StructuredLogger;
