//! Bounded, newest-first record of past predictions.

mod ledger;

pub use ledger::{HistoryLedger, PredictionHistoryItem, HISTORY_CAPACITY};
