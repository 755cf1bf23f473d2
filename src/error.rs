//! Uniform prediction failure: one reportable error carrying its kind and a message.

use thiserror::Error;

/// Distinguishes where a prediction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied input that could not be turned into a feature vector
    InvalidInput,
    /// The remote call did not complete (network, auth, quota)
    Transport,
    /// The remote call completed but the payload breaks the result contract
    MalformedResponse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Transport => "transport",
            ErrorKind::MalformedResponse => "malformed_response",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("AI Prediction Failed: invalid input: {0}")]
    InvalidInput(String),

    #[error("AI Prediction Failed: {0}")]
    Transport(String),

    #[error("AI Prediction Failed: malformed response: {0}")]
    MalformedResponse(String),
}

impl PredictionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictionError::InvalidInput(_) => ErrorKind::InvalidInput,
            PredictionError::Transport(_) => ErrorKind::Transport,
            PredictionError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}

impl From<reqwest::Error> for PredictionError {
    fn from(err: reqwest::Error) -> Self {
        PredictionError::Transport(err.to_string())
    }
}
