//! Advisor-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Completion API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
