use thiserror::Error;

use crate::implementations::config::ConfigError;
use crate::models::law::LawKind;

/// Errors that stop a verification run.
///
/// A broken contract is never reported through this type; it ends up as a
/// `Violation` inside a normally returned report.
#[derive(Debug, Error)]
pub enum EqlawError {
    #[error("The {law} check needs at least one sample, got none")]
    EmptySamples { law: LawKind },

    #[error("Repeat count must be at least 1, got {0}")]
    InvalidRepeats(usize),

    #[error("Predicate failed during the {law} check on samples ({left}, {right}): {message}")]
    PredicateFailed { law: LawKind, left: usize, right: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type specific to eqlaw operations
pub type EqlawResult<T> = Result<T, EqlawError>;

impl EqlawError {
    /// True when the error came from the caller's predicate rather than
    /// from malformed arguments.
    pub fn is_predicate_failure(&self) -> bool {
        matches!(self, EqlawError::PredicateFailed { .. })
    }
}

impl From<serde_json::Error> for EqlawError {
    fn from(err: serde_json::Error) -> Self {
        EqlawError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for EqlawError {
    fn from(err: serde_yaml::Error) -> Self {
        EqlawError::Serialization(err.to_string())
    }
}
