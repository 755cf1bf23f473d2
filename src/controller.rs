//! Page-level orchestration: owns the form input, the last outcome and the history.
//!
//! One request in flight at a time, guarded by the Pending state rather than a lock
//! held across the remote call. The state mutex is only taken between awaits.

use crate::client::PredictionClient;
use crate::features::{FieldUpdate, PredictionInput};
use crate::history::{HistoryLedger, PredictionHistoryItem};
use crate::model::ScoringService;
use crate::risk::PredictionResult;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Last settled outcome. Result and error are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Result(PredictionResult),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle(Outcome),
    Pending,
}

/// Everything the view layer renders, read in one go.
#[derive(Debug, Clone)]
pub struct ControllerSnapshot {
    pub input: PredictionInput,
    pub pending: bool,
    pub result: Option<PredictionResult>,
    pub error: Option<String>,
    pub history: Vec<PredictionHistoryItem>,
}

/// Returns the controller to Idle if a `submit` future is dropped before it settles.
struct PendingGuard<'a> {
    state: &'a Mutex<ControllerState>,
    armed: bool,
}

impl PendingGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if st.phase == Phase::Pending {
            debug!("submit dropped while pending; back to idle");
            st.phase = Phase::Idle(Outcome::Empty);
        }
    }
}

struct ControllerState {
    input: PredictionInput,
    phase: Phase,
    history: HistoryLedger,
}

pub struct InteractionController<S> {
    client: PredictionClient<S>,
    state: Mutex<ControllerState>,
}

impl<S: ScoringService> InteractionController<S> {
    pub fn new(client: PredictionClient<S>) -> Self {
        Self::with_input(client, PredictionInput::default())
    }

    pub fn with_input(client: PredictionClient<S>, input: PredictionInput) -> Self {
        Self {
            client,
            state: Mutex::new(ControllerState {
                input,
                phase: Phase::Idle(Outcome::Empty),
                history: HistoryLedger::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn client(&self) -> &PredictionClient<S> {
        &self.client
    }

    /// Edit one field of the current input. Ignored (returns false) while a request is pending.
    pub fn update_field(&self, update: FieldUpdate) -> bool {
        let mut st = self.lock();
        if st.phase == Phase::Pending {
            debug!(?update, "field update ignored while pending");
            return false;
        }
        st.input.apply(update);
        true
    }

    /// Score the current input. Returns false without doing anything if a request is already in flight.
    pub async fn submit(&self) -> bool {
        let snapshot = {
            let mut st = self.lock();
            if st.phase == Phase::Pending {
                debug!("submit ignored while pending");
                return false;
            }
            st.phase = Phase::Pending;
            st.input.clone()
        };
        let guard = PendingGuard { state: &self.state, armed: true };

        let outcome = self.client.predict(&snapshot).await;

        guard.disarm();
        let mut st = self.lock();
        let settled = match outcome {
            Ok(result) => {
                let item = st.history.record(snapshot, result.clone());
                info!(history_id = %item.id, history_len = st.history.len(), "prediction recorded");
                Outcome::Result(result)
            }
            Err(e) => Outcome::Error(e.to_string()),
        };
        st.phase = Phase::Idle(settled);
        true
    }

    pub fn input(&self) -> PredictionInput {
        self.lock().input.clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().phase == Phase::Pending
    }

    pub fn result(&self) -> Option<PredictionResult> {
        match &self.lock().phase {
            Phase::Idle(Outcome::Result(r)) => Some(r.clone()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<String> {
        match &self.lock().phase {
            Phase::Idle(Outcome::Error(e)) => Some(e.clone()),
            _ => None,
        }
    }

    pub fn history(&self) -> Vec<PredictionHistoryItem> {
        self.lock().history.items()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        let st = self.lock();
        let (pending, result, error) = match &st.phase {
            Phase::Pending => (true, None, None),
            Phase::Idle(Outcome::Empty) => (false, None, None),
            Phase::Idle(Outcome::Result(r)) => (false, Some(r.clone()), None),
            Phase::Idle(Outcome::Error(e)) => (false, None, Some(e.clone())),
        };
        ControllerSnapshot {
            input: st.input.clone(),
            pending,
            result,
            error,
            history: st.history.items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictionError;
    use crate::features::{InputField, WeatherCondition};
    use crate::model::ScoringRequest;
    use std::collections::VecDeque;

    /// Pops scripted replies in order.
    struct Script(Mutex<VecDeque<Result<String, PredictionError>>>);

    impl Script {
        fn new(replies: Vec<Result<String, PredictionError>>) -> Self {
            Self(Mutex::new(replies.into()))
        }
    }

    impl ScoringService for Script {
        async fn generate(&self, _request: &ScoringRequest) -> Result<String, PredictionError> {
            self.0
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(PredictionError::Transport("script exhausted".into())))
        }
    }

    const HIGH: &str =
        r#"{"riskLevel":"High","riskProbability":91,"confidenceScore":0.9,"clusterAssignment":3}"#;

    #[test]
    fn starts_idle_with_default_input() {
        let c = InteractionController::new(PredictionClient::new(Script::new(vec![])));
        let snap = c.snapshot();
        assert_eq!(snap.input, PredictionInput::default());
        assert!(!snap.pending);
        assert!(snap.result.is_none() && snap.error.is_none());
        assert!(snap.history.is_empty());
        assert_eq!(c.phase(), Phase::Idle(Outcome::Empty));
    }

    #[test]
    fn update_field_mutates_without_validation() {
        let c = InteractionController::new(PredictionClient::new(Script::new(vec![])));
        assert!(c.update_field(FieldUpdate::Numeric(InputField::PoiCount, 999)));
        assert!(c.update_field(FieldUpdate::Weather(WeatherCondition::Fog)));
        let input = c.input();
        assert_eq!(input.poi_count, 999);
        assert_eq!(input.weather_condition, WeatherCondition::Fog);
    }

    #[tokio::test]
    async fn error_replaces_result_and_result_replaces_error() {
        let c = InteractionController::new(PredictionClient::new(Script::new(vec![
            Ok(HIGH.to_string()),
            Err(PredictionError::Transport("401 Unauthorized".into())),
            Ok(HIGH.to_string()),
        ])));

        assert!(c.submit().await);
        assert_eq!(c.result().unwrap().cluster_assignment, 3);
        assert!(c.error().is_none());

        assert!(c.submit().await);
        assert!(c.result().is_none());
        assert_eq!(c.error().unwrap(), "AI Prediction Failed: 401 Unauthorized");
        assert_eq!(c.history().len(), 1);

        assert!(c.submit().await);
        assert!(c.error().is_none());
        assert!(c.result().is_some());
        assert_eq!(c.history().len(), 2);
        assert!(!c.is_pending());
    }

    /// First call never answers within the test's patience; later calls answer at once.
    struct StallsOnce(std::sync::atomic::AtomicUsize);

    impl ScoringService for StallsOnce {
        async fn generate(&self, _request: &ScoringRequest) -> Result<String, PredictionError> {
            if self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
                tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
            }
            Ok(HIGH.to_string())
        }
    }

    #[tokio::test]
    async fn dropped_submit_returns_to_idle() {
        let c = InteractionController::new(PredictionClient::new(StallsOnce(Default::default())));
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), c.submit()).await;
        assert!(timed_out.is_err());

        assert!(!c.is_pending());
        assert_eq!(c.phase(), Phase::Idle(Outcome::Empty));
        assert!(c.history().is_empty());
        assert!(c.update_field(FieldUpdate::Numeric(InputField::SchoolCount, 4)));

        assert!(c.submit().await);
        assert_eq!(c.result().unwrap().cluster_assignment, 3);
        assert_eq!(c.history().len(), 1);
        assert_eq!(c.history()[0].inputs.school_count, 4);
    }

    #[tokio::test]
    async fn history_keeps_raw_input_snapshot() {
        let c = InteractionController::new(PredictionClient::new(Script::new(vec![Ok(HIGH.to_string())])));
        c.update_field(FieldUpdate::Numeric(InputField::Temperature, 80));
        c.submit().await;
        let history = c.history();
        assert_eq!(history[0].inputs.temperature, 80);
    }
}
