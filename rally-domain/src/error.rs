//! Error types for rally-domain.

use thiserror::Error;

/// Reasons the planner refuses to produce a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A single leg is longer than a whole day's budget, so no day assignment can
    /// cover it without splitting the leg.
    #[error(
        "waypoint \"{waypoint}\": distance to next waypoint ({distance} km) exceeds the maximum daily distance ({max} km)"
    )]
    LegTooLong {
        waypoint: String,
        distance: u32,
        max: u32,
    },
}

impl PlanError {
    /// Identifier of the waypoint the error is about.
    pub fn waypoint(&self) -> &str {
        match self {
            PlanError::LegTooLong { waypoint, .. } => waypoint,
        }
    }

    /// Returns the recommended exit code for this error.
    ///
    /// Refusals are reported with exit code 2, apart from runtime failures (1).
    pub fn exit_code(&self) -> u8 {
        match self {
            PlanError::LegTooLong { .. } => 2,
        }
    }
}
