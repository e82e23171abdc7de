use crate::error::PlanError;
use rally_types::plan::{PlanEntry, RallyPlan};
use rally_types::waypoint::Waypoint;
use tracing::{debug, warn};

/// Maximum distance, in kilometres, the team covers in a single day.
pub const MAX_DAILY_DISTANCE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    pub max_daily_distance: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_daily_distance: MAX_DAILY_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Assigns a day to every waypoint in a single greedy pass.
    ///
    /// A leg that still fits in today's budget is consumed today. A leg that does
    /// not fit makes the team sleep at that waypoint: the day advances and the
    /// budget is reset, without charging that leg to the new day. A leg longer than
    /// the whole daily budget aborts planning with [`PlanError::LegTooLong`].
    pub fn make_plan(&self, waypoints: &[Waypoint]) -> Result<RallyPlan, PlanError> {
        let max = self.config.max_daily_distance;
        let mut entries = Vec::with_capacity(waypoints.len());

        let mut current_day: u32 = 1;
        let mut remaining = max;
        for w in waypoints {
            let leg = w.distance_to_next();
            if leg <= remaining {
                remaining -= leg;
            } else if leg > max {
                warn!(waypoint = %w, leg, max, "leg exceeds maximum daily distance");
                return Err(PlanError::LegTooLong {
                    waypoint: w.id().to_string(),
                    distance: leg,
                    max,
                });
            } else {
                current_day += 1;
                remaining = max;
                debug!(waypoint = %w, day = current_day, "sleeping here, next leg does not fit");
            }
            entries.push(PlanEntry {
                waypoint: w.clone(),
                day: current_day,
            });
        }

        let plan = RallyPlan::from_entries(max, entries);
        debug!(
            waypoints = plan.summary().waypoints_total,
            days = plan.summary().days_total,
            "plan complete"
        );
        Ok(plan)
    }
}

/// Plans with the default [`MAX_DAILY_DISTANCE`].
pub fn make_plan(waypoints: &[Waypoint]) -> Result<RallyPlan, PlanError> {
    Planner::new().make_plan(waypoints)
}
