//! Error types for the qpath crate

use thiserror::Error;

/// Main error type for the qpath crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("environment must have at least one state")]
    EmptyStateSpace,

    #[error("goal state {goal} is out of range (state count is {state_count})")]
    GoalOutOfRange { goal: usize, state_count: usize },

    #[error("state {state} has an empty action list; no transition could be sampled from it")]
    EmptyActionList { state: usize },

    #[error("action list given for state {state}, which is out of range (state count is {state_count})")]
    ActionStateOutOfRange { state: usize, state_count: usize },

    #[error(
        "action list for state {state} references state {next}, which is out of range (state count is {state_count})"
    )]
    TransitionOutOfRange {
        state: usize,
        next: usize,
        state_count: usize,
    },

    #[error(
        "reward entry ({from}, {to}) references a state out of range (state count is {state_count})"
    )]
    RewardOutOfRange {
        from: usize,
        to: usize,
        state_count: usize,
    },

    #[error("expected {expected} state labels, got {got}")]
    LabelCountMismatch { expected: usize, got: usize },

    #[error("learning rate {value} must be in (0, 1]")]
    InvalidLearningRate { value: f64 },

    #[error("discount factor {value} must be in [0, 1]")]
    InvalidDiscountFactor { value: f64 },

    #[error("sequence lengths differ: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("cannot take the mean of empty sequences")]
    EmptySequence,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
