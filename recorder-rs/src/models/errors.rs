//! Module errors

use thiserror::Error;

use super::duration::DurationField;

/// Represents the different types of errors that can occur while recording.
#[derive(Debug, Error)]
pub enum RecorderError {
    /// A duration field is outside its allowed range.
    #[error("{field} must be between 0 and {max}, got {value}")]
    InputOutOfRange {
        field: DurationField,
        value: u64,
        max: u64,
    },

    /// A duration field is not a non-negative integer.
    #[error("{field} is not a number: '{value}'")]
    InvalidNumber { field: DurationField, value: String },

    /// Every duration field is zero.
    #[error("session duration must be longer than zero seconds")]
    ZeroDuration,

    #[error("a recording session is already active")]
    SessionActive,

    #[error("no recording session is active")]
    NoActiveSession,

    /// Creating, writing or closing a log file failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Configuration(String),
}
