//! Tracker Errors
//!
//! The only fallible paths are parsing raw values (statuses, filters) and
//! loading generator configuration. Rendering never fails.

use serde::{Deserialize, Serialize};

/// Common result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Tracker-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackerError {
    InvalidInput(String),
    Config(String),
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TrackerError::Config(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {}
