//! Error types for the quadcopter task.

use std::fmt;

/// Result type for task operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors raised at the task's API boundary.
///
/// Numeric problems inside the pipeline (NaN actions, NaN poses) are not
/// errors: they propagate into the state and reward unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskError {
    /// Invalid configuration (non-positive runtime, non-finite pose, etc.)
    InvalidConfig {
        param: String,
        message: String,
    },
    /// Action slice has the wrong length
    ActionDimensionMismatch {
        expected: usize,
        actual: usize,
    },
}

impl TaskError {
    pub(crate) fn invalid_config(param: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { param, message } => {
                write!(f, "Invalid configuration for '{}': {}", param, message)
            }
            Self::ActionDimensionMismatch { expected, actual } => {
                write!(f, "Action dimension mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for TaskError {}
