use crate::waypoint::Waypoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Day-by-day itinerary: every input waypoint, in input order, with the day it
/// is visited on.
///
/// Deserialization goes through [`RallyPlan::from_entries`], so a stored summary is
/// never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRallyPlan")]
pub struct RallyPlan {
    schema: String,
    max_daily_distance: u32,
    entries: Vec<PlanEntry>,
    summary: PlanSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub waypoint: Waypoint,
    pub day: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub waypoints_total: u64,
    pub days_total: u32,
    pub distance_total: u64,
}

/// Wire shape of a plan before its invariants are checked.
#[derive(Debug, Deserialize)]
struct RawRallyPlan {
    schema: String,
    max_daily_distance: u32,

    #[serde(default)]
    entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPlan {
    #[error("unsupported plan schema '{found}' (expected '{expected}')")]
    Schema {
        found: String,
        expected: &'static str,
    },

    #[error("entry {index} ('{waypoint}') has day 0; days start at 1")]
    DayZero { index: usize, waypoint: String },
}

impl TryFrom<RawRallyPlan> for RallyPlan {
    type Error = InvalidPlan;

    fn try_from(raw: RawRallyPlan) -> Result<Self, Self::Error> {
        if raw.schema != crate::schema::RALLY_PLAN_V1 {
            return Err(InvalidPlan::Schema {
                found: raw.schema,
                expected: crate::schema::RALLY_PLAN_V1,
            });
        }
        if let Some((index, e)) = raw.entries.iter().enumerate().find(|(_, e)| e.day == 0) {
            return Err(InvalidPlan::DayZero {
                index,
                waypoint: e.waypoint.id().to_string(),
            });
        }
        Ok(RallyPlan::from_entries(raw.max_daily_distance, raw.entries))
    }
}

impl RallyPlan {
    /// Builds a plan from already-assigned entries. The summary is derived here
    /// so it cannot drift from the entries.
    pub fn from_entries(max_daily_distance: u32, entries: Vec<PlanEntry>) -> Self {
        let summary = summarize(&entries);
        Self {
            schema: crate::schema::RALLY_PLAN_V1.to_string(),
            max_daily_distance,
            entries,
            summary,
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn max_daily_distance(&self) -> u32 {
        self.max_daily_distance
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn summary(&self) -> &PlanSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Waypoint, u32)> {
        self.entries.iter().map(|e| (&e.waypoint, e.day))
    }

    /// Day of the first waypoint with this identifier.
    pub fn day_of(&self, id: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.waypoint.id() == id)
            .map(|e| e.day)
    }

    /// Waypoints grouped by day, in day order.
    pub fn days(&self) -> Vec<(u32, Vec<&Waypoint>)> {
        let mut out: Vec<(u32, Vec<&Waypoint>)> = Vec::new();
        for e in &self.entries {
            match out.last_mut() {
                Some((day, group)) if *day == e.day => group.push(&e.waypoint),
                _ => out.push((e.day, vec![&e.waypoint])),
            }
        }
        out
    }
}

fn summarize(entries: &[PlanEntry]) -> PlanSummary {
    PlanSummary {
        waypoints_total: entries.len() as u64,
        days_total: entries.iter().map(|e| e.day).max().unwrap_or(0),
        distance_total: entries
            .iter()
            .map(|e| u64::from(e.waypoint.distance_to_next()))
            .sum(),
    }
}
