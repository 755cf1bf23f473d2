//! History ledger: prepend on record, evict the oldest beyond capacity.

use crate::features::PredictionInput;
use crate::risk::PredictionResult;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

pub const HISTORY_CAPACITY: usize = 10;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful prediction. Created once by [`HistoryLedger::record`], never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionHistoryItem {
    pub id: Uuid,
    /// Local time, for display
    pub timestamp: String,
    pub recorded_at: DateTime<Utc>,
    pub inputs: PredictionInput,
    pub result: PredictionResult,
}

#[derive(Debug, Default)]
pub struct HistoryLedger {
    items: VecDeque<PredictionHistoryItem>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    pub fn record(&mut self, input: PredictionInput, result: PredictionResult) -> PredictionHistoryItem {
        let recorded_at = Utc::now();
        let item = PredictionHistoryItem {
            id: Uuid::new_v4(),
            timestamp: recorded_at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            recorded_at,
            inputs: input,
            result,
        };
        self.items.push_front(item.clone());
        self.items.truncate(HISTORY_CAPACITY);
        item
    }

    /// Snapshot, newest first.
    pub fn items(&self) -> Vec<PredictionHistoryItem> {
        self.items.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&PredictionHistoryItem> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskLevel;
    use std::collections::HashSet;

    fn result(cluster: u32) -> PredictionResult {
        PredictionResult {
            risk_level: RiskLevel::Low,
            risk_probability: 12.0,
            confidence_score: 0.7,
            cluster_assignment: cluster,
        }
    }

    #[test]
    fn empty_ledger() {
        let ledger = HistoryLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.latest().is_none());
        assert!(ledger.items().is_empty());
    }

    #[test]
    fn capacity_holds_and_newest_first() {
        let mut ledger = HistoryLedger::new();
        let mut last = None;
        for i in 0..25u32 {
            let input = PredictionInput { num_vehicles: i as i64, ..PredictionInput::default() };
            last = Some(ledger.record(input, result(i)));
            assert!(ledger.len() <= HISTORY_CAPACITY);
        }
        let items = ledger.items();
        assert_eq!(items.len(), HISTORY_CAPACITY);
        assert_eq!(Some(&items[0]), last.as_ref());
        // Order is by recording, not by payload: 24 down to 15
        let clusters: Vec<u32> = items.iter().map(|it| it.result.cluster_assignment).collect();
        assert_eq!(clusters, (15..25).rev().collect::<Vec<_>>());
    }

    #[test]
    fn ids_unique_even_within_one_clock_tick() {
        let mut ledger = HistoryLedger::new();
        for _ in 0..HISTORY_CAPACITY {
            ledger.record(PredictionInput::default(), result(1));
        }
        let ids: HashSet<Uuid> = ledger.items().iter().map(|it| it.id).collect();
        assert_eq!(ids.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn timestamp_is_human_readable() {
        let mut ledger = HistoryLedger::new();
        let item = ledger.record(PredictionInput::default(), result(2));
        assert_eq!(item.timestamp.len(), "2026-01-01 00:00:00".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&item.timestamp, TIMESTAMP_FORMAT).is_ok());
    }
}
