//! Core error types.

use thiserror::Error;

/// Errors from definition validation.
///
/// Every variant corresponds to one structural rule; any violation aborts
/// construction of the whole definition.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid state count: {count} (must be between 1 and {max})")]
    InvalidStateCount { count: i64, max: usize },

    #[error("invalid initial state: {state} (must be between 0 and {num_states} - 1)")]
    InvalidInitialState { state: i64, num_states: usize },

    #[error("invalid accepting state set: {reason}")]
    InvalidAcceptingState { reason: String },

    #[error("invalid transition count: {count} (must be between 0 and {max})")]
    InvalidTransitionCount { count: i64, max: usize },

    #[error("invalid transition: {reason}")]
    InvalidTransition { reason: String },
}

impl CoreError {
    /// Returns a stable error code suitable for machine consumption.
    pub fn error_code(&self) -> &'static str {
        match self {
            CoreError::InvalidStateCount { .. } => "INVALID_STATE_COUNT",
            CoreError::InvalidInitialState { .. } => "INVALID_INITIAL_STATE",
            CoreError::InvalidAcceptingState { .. } => "INVALID_ACCEPTING_STATE",
            CoreError::InvalidTransitionCount { .. } => "INVALID_TRANSITION_COUNT",
            CoreError::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}
