//! Shared DTOs (schemas-as-code) for the rally workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod plan;
pub mod waypoint;

/// Schema identifiers.
pub mod schema {
    pub const RALLY_PLAN_V1: &str = "rally.plan.v1";
}
