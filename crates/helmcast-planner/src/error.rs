//! Planning pipeline error types.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Pipeline stage an upstream failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocode,
    Forecast,
    Completion,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Geocode => "geocoding",
            Stage::Forecast => "forecast",
            Stage::Completion => "completion",
        };
        write!(f, "{}", name)
    }
}

/// Coarse classification of a plan failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition on configuration was not met.
    Config,
    /// The request itself was rejected before any network work.
    Validation,
    /// An upstream lookup had no result for the input.
    NotFound,
    /// An upstream service call failed.
    Upstream,
}

/// Why a planning run failed.
///
/// Owned data only: a failure is both stored in the planner state and
/// returned to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A required API credential is absent. Carries the credential's role.
    #[error("Missing {0} API credential")]
    MissingCredential(&'static str),

    /// The request failed validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Geocoding produced no candidates for the requested location.
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The forecast had no intervals for the target date.
    #[error("No forecast available for {0}")]
    ForecastUnavailable(NaiveDate),

    /// An upstream service call failed.
    #[error("Upstream {stage} error: {message}")]
    Upstream { stage: Stage, message: String },
}

impl PlanError {
    /// The coarse failure classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::MissingCredential(_) => ErrorKind::Config,
            PlanError::InvalidRequest(_) => ErrorKind::Validation,
            PlanError::LocationNotFound(_) | PlanError::ForecastUnavailable(_) => {
                ErrorKind::NotFound
            }
            PlanError::Upstream { .. } => ErrorKind::Upstream,
        }
    }

    /// Short message suitable for showing directly to the user.
    pub fn user_message(&self) -> String {
        match self {
            PlanError::MissingCredential(role) => {
                format!("The {} API credential is not configured.", role)
            }
            PlanError::InvalidRequest(message) => {
                format!("Please check your input: {}.", message)
            }
            PlanError::LocationNotFound(location) => {
                format!(
                    "Could not find '{}'. Try a nearby larger town or check the spelling.",
                    location
                )
            }
            PlanError::ForecastUnavailable(date) => {
                format!("No wind forecast is available for {}.", date)
            }
            PlanError::Upstream { stage, message } => {
                format!("The {} service failed: {}.", stage, message)
            }
        }
    }
}
