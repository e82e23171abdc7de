//! Configuration file loading for rally.
//!
//! Discovers and loads `rally.toml` from the working directory, or from an explicit path.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use rally_domain::MAX_DAILY_DISTANCE;
use rally_render::RenderFormat;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "rally.toml";

/// Top-level configuration from rally.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RallyConfig {
    /// Planner settings.
    pub planner: PlannerSection,

    /// Output settings.
    pub render: RenderSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerSection {
    /// Maximum distance covered per day, in kilometres.
    pub max_daily_distance: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSection {
    /// Default output format for the plan.
    pub format: Option<RenderFormat>,
}

/// Discover the rally.toml config file in `dir`.
///
/// Returns `None` if no config file is found.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a rally.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<RallyConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<RallyConfig> {
    let config: RallyConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config if given, otherwise discover one in `dir`, otherwise defaults.
///
/// An explicit path that does not exist is an error; a missing discovered file is not.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    dir: &Utf8Path,
) -> anyhow::Result<RallyConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(RallyConfig::default()),
    }
}

/// Configuration after folding CLI flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedConfig {
    pub max_daily_distance: u32,
    pub format: RenderFormat,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: RallyConfig,
}

impl ConfigMerger {
    pub fn new(config: RallyConfig) -> Self {
        Self { config }
    }

    /// CLI values win when present; otherwise the config file, otherwise built-in defaults.
    pub fn merge(
        self,
        cli_max_daily_distance: Option<u32>,
        cli_format: Option<RenderFormat>,
    ) -> MergedConfig {
        MergedConfig {
            max_daily_distance: cli_max_daily_distance
                .or(self.config.planner.max_daily_distance)
                .unwrap_or(MAX_DAILY_DISTANCE),
            format: cli_format.or(self.config.render.format).unwrap_or_default(),
        }
    }
}
