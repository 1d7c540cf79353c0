//! Plan run lifecycle state machine.
//!
//! Tracks one run at a time per planner. Observed by the caller through
//! `SailPlanner::state`.

use crate::error::PlanError;
use crate::planner::SailPlan;

/// Lifecycle of the most recent planning run.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlanState {
    /// No run has started yet.
    #[default]
    Idle,
    /// A run is in flight.
    Running,
    /// The last run produced a plan.
    Succeeded(SailPlan),
    /// The last run failed.
    Failed(PlanError),
}

impl PlanState {
    /// True while a run is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self, PlanState::Running)
    }

    /// True once a run has finished, either way.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlanState::Succeeded(_) | PlanState::Failed(_))
    }

    /// Short label for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            PlanState::Idle => "idle",
            PlanState::Running => "running",
            PlanState::Succeeded(_) => "succeeded",
            PlanState::Failed(_) => "failed",
        }
    }
}
