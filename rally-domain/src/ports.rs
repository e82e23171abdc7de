use crate::route::{parse_route_json, parse_route_toml};
use anyhow::Context;
use camino::Utf8PathBuf;
use fs_err as fs;
use rally_types::waypoint::Waypoint;
use tracing::debug;

/// Source of an ordered route.
///
/// rally-domain uses this so callers can plan from files, fixtures, or in-memory data alike.
pub trait RouteSource {
    fn load_route(&self) -> anyhow::Result<Vec<Waypoint>>;
}

impl RouteSource for Vec<Waypoint> {
    fn load_route(&self) -> anyhow::Result<Vec<Waypoint>> {
        Ok(self.clone())
    }
}

/// File-system backed `RouteSource`. The format follows the file extension
/// (`.json` or `.toml`).
#[derive(Debug, Clone)]
pub struct FsRouteSource {
    path: Utf8PathBuf,
}

impl FsRouteSource {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }
}

impl RouteSource for FsRouteSource {
    fn load_route(&self) -> anyhow::Result<Vec<Waypoint>> {
        let contents =
            fs::read_to_string(&self.path).with_context(|| format!("read {}", self.path))?;
        let route = match self.path.extension() {
            Some("json") => parse_route_json(&contents),
            Some("toml") => parse_route_toml(&contents),
            other => anyhow::bail!(
                "unsupported route format {:?} for {} (expected .json or .toml)",
                other.unwrap_or(""),
                self.path
            ),
        }
        .with_context(|| format!("parse route file {}", self.path))?;
        debug!("loaded {} waypoints from {}", route.len(), self.path);
        Ok(route)
    }
}
