//! Domain logic: turn an ordered route into a day-by-day rally plan.
//!
//! This crate owns *which day* each waypoint is visited on. It does not own how a
//! plan is shown; that's the `rally-render` crate.

mod error;
mod planner;
mod ports;
mod route;

pub use error::PlanError;
pub use planner::{MAX_DAILY_DISTANCE, Planner, PlannerConfig, make_plan};
pub use ports::{FsRouteSource, RouteSource};
pub use route::{demo_route, parse_route_json, parse_route_toml};
