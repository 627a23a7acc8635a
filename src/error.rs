use thiserror::Error;

use crate::training::ActivityKind;

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown workout type: {code}")]
    UnknownActivity { code: String },

    #[error("{kind} expects {expected} values, got {actual}")]
    Arity {
        kind: ActivityKind,
        expected: usize,
        actual: usize,
    },

    #[error("Division by zero: {quantity} must be nonzero")]
    DivisionByZero { quantity: &'static str },

    #[error("Invalid value {value:?}: {reason}")]
    InvalidValue { value: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl WorkoutError {
    /// True for errors the driving loop reports with a notice instead of failing the entry.
    pub fn is_unknown_activity(&self) -> bool {
        matches!(self, WorkoutError::UnknownActivity { .. })
    }
}
