//! Rendering helpers for human- and machine-readable rally plans.
//!
//! Every output format is a [`PlanRenderer`]; callers pick one with
//! [`renderer_for`] and never depend on a concrete format.

use anyhow::Context;
use rally_types::plan::RallyPlan;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const NAME_WIDTH: usize = 20;
const MAX_DAY_SHOWN: u32 = 999_999;
const RULE: &str = "------------------------------------";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderFormat {
    #[default]
    Table,
    Markdown,
    Json,
}

impl RenderFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderFormat::Table => "table",
            RenderFormat::Markdown => "markdown",
            RenderFormat::Json => "json",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A presentation of a finished plan.
pub trait PlanRenderer {
    fn format(&self) -> RenderFormat;

    fn render(&self, plan: &RallyPlan) -> anyhow::Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl PlanRenderer for TableRenderer {
    fn format(&self) -> RenderFormat {
        RenderFormat::Table
    }

    fn render(&self, plan: &RallyPlan) -> anyhow::Result<String> {
        Ok(render_plan_table(plan))
    }
}

impl PlanRenderer for MarkdownRenderer {
    fn format(&self) -> RenderFormat {
        RenderFormat::Markdown
    }

    fn render(&self, plan: &RallyPlan) -> anyhow::Result<String> {
        Ok(render_plan_md(plan))
    }
}

impl PlanRenderer for JsonRenderer {
    fn format(&self) -> RenderFormat {
        RenderFormat::Json
    }

    fn render(&self, plan: &RallyPlan) -> anyhow::Result<String> {
        render_plan_json(plan)
    }
}

pub fn renderer_for(format: RenderFormat) -> Box<dyn PlanRenderer> {
    debug!("using {} renderer", format);
    match format {
        RenderFormat::Table => Box::new(TableRenderer),
        RenderFormat::Markdown => Box::new(MarkdownRenderer),
        RenderFormat::Json => Box::new(JsonRenderer),
    }
}

/// Fixed-width console table, one row per waypoint.
pub fn render_plan_table(plan: &RallyPlan) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("|            RALLY PLAN            |\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str("|        CAMPING       | VISIT DAY |\n");
    out.push_str(RULE);
    out.push('\n');
    for (waypoint, day) in plan.iter() {
        out.push_str(&format!(
            "| {:<width$} | {:>8}  |\n",
            truncate_name(waypoint.id()),
            day_label(day),
            width = NAME_WIDTH
        ));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

pub fn render_plan_md(plan: &RallyPlan) -> String {
    let summary = plan.summary();
    let mut out = String::new();
    out.push_str("# rally plan\n\n");
    out.push_str(&format!("- Waypoints: {}\n", summary.waypoints_total));
    out.push_str(&format!("- Days: {}\n", summary.days_total));
    out.push_str(&format!(
        "- Max daily distance: {} km\n",
        plan.max_daily_distance()
    ));
    out.push_str(&format!(
        "- Total distance: {} km\n\n",
        summary.distance_total
    ));

    out.push_str("## Days\n\n");
    if plan.is_empty() {
        out.push_str("_No waypoints planned._\n");
        return out;
    }

    for (day, waypoints) in plan.days() {
        out.push_str(&format!("### Day {}\n\n", day));
        for w in waypoints {
            out.push_str(&format!(
                "- {} ({} km to next)\n",
                code_span(w.id()),
                w.distance_to_next()
            ));
        }
        out.push('\n');
    }

    out
}

pub fn render_plan_json(plan: &RallyPlan) -> anyhow::Result<String> {
    let mut s = serde_json::to_string_pretty(plan).context("serialize plan json")?;
    s.push('\n');
    Ok(s)
}

/// Inline code span whose fence is longer than any backtick run inside `text`.
fn code_span(text: &str) -> String {
    let longest_run = text.split(|c: char| c != '`').map(str::len).max().unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if longest_run == 0 {
        format!("{fence}{text}{fence}")
    } else {
        format!("{fence} {text} {fence}")
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

fn day_label(day: u32) -> String {
    if day > MAX_DAY_SHOWN {
        format!("> {}", MAX_DAY_SHOWN)
    } else {
        day.to_string()
    }
}
