//! Route file formats and the built-in demo route.

use anyhow::Context;
use rally_types::waypoint::Waypoint;
use serde::Deserialize;

/// JSON routes are either a bare array of waypoints or an object with a
/// `waypoints` array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonRoute {
    Bare(Vec<Waypoint>),
    Wrapped { waypoints: Vec<Waypoint> },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlRoute {
    waypoint: Vec<Waypoint>,
}

pub fn parse_route_json(contents: &str) -> anyhow::Result<Vec<Waypoint>> {
    let route: JsonRoute = serde_json::from_str(contents).context("invalid route JSON")?;
    Ok(match route {
        JsonRoute::Bare(ws) => ws,
        JsonRoute::Wrapped { waypoints } => waypoints,
    })
}

pub fn parse_route_toml(contents: &str) -> anyhow::Result<Vec<Waypoint>> {
    let route: TomlRoute = toml::from_str(contents).context("invalid route TOML")?;
    Ok(route.waypoint)
}

/// Sample route: starting line, three campings, and the last camping before the finish.
pub fn demo_route() -> Vec<Waypoint> {
    vec![
        Waypoint::new("Starting line", 10),
        Waypoint::new("B", 30),
        Waypoint::new("C", 25),
        Waypoint::new("D", 5),
        Waypoint::new("Last before end", 48),
    ]
}
