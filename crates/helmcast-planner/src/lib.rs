//! Helmcast planning pipeline
//!
//! Orchestrates geocoding, wind forecasting, date filtering, and advice
//! generation behind a single state-tracked entry point.

pub mod error;
pub mod planner;
pub mod request;
pub mod state;

pub use error::{ErrorKind, PlanError, Stage};
pub use planner::{SailPlan, SailPlanner};
pub use request::PlanRequest;
pub use state::PlanState;
