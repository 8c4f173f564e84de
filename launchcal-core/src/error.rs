//! Error types for launchcal.

use thiserror::Error;

/// Errors that can occur in launchcal operations.
#[derive(Error, Debug)]
pub enum LaunchCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid month {year}/{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Failed to fetch events: {0}")]
    Fetch(String),

    #[error("Events request failed with HTTP {0}")]
    Status(u16),

    #[error("Malformed events payload: {0}")]
    Malformed(String),

    #[error("No event on {0}")]
    NoEventOnDay(String),
}

impl From<reqwest::Error> for LaunchCalError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LaunchCalError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            LaunchCalError::Status(status.as_u16())
        } else {
            LaunchCalError::Fetch(e.to_string())
        }
    }
}

impl From<serde_json::Error> for LaunchCalError {
    fn from(e: serde_json::Error) -> Self {
        LaunchCalError::Malformed(e.to_string())
    }
}

/// Result type alias for launchcal operations.
pub type LaunchCalResult<T> = Result<T, LaunchCalError>;
