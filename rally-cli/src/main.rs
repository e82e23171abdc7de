mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::{ConfigMerger, MergedConfig};
use fs_err as fs;
use rally_domain::{FsRouteSource, PlanError, Planner, PlannerConfig, RouteSource, demo_route};
use rally_render::{RenderFormat, render_plan_json, render_plan_md, renderer_for};
use rally_types::plan::RallyPlan;
use rally_types::waypoint::Waypoint;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "rally",
    version,
    about = "Plans on which day a rally team reaches each camping along a route."
)]
struct Cli {
    /// Config file (default: ./rally.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a route loaded from a JSON or TOML file.
    Plan(PlanArgs),
    /// Plan the built-in sample route and report how long planning took.
    Demo(DemoArgs),
}

#[derive(Debug, Parser)]
struct PlanArgs {
    /// Route file (.json or .toml), ordered from the starting line.
    #[arg(long)]
    route: Utf8PathBuf,

    #[command(flatten)]
    output: OutputArgs,

    /// Also write plan.json and plan.md into this directory.
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct DemoArgs {
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, clap::Args)]
struct OutputArgs {
    /// Maximum distance covered per day, in kilometres (default: 50).
    #[arg(long, env = "RALLY_MAX_DAILY_DISTANCE")]
    max_daily_distance: Option<u32>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Markdown,
    Json,
}

impl From<OutputFormat> for RenderFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Table => RenderFormat::Table,
            OutputFormat::Markdown => RenderFormat::Markdown,
            OutputFormat::Json => RenderFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(exit_code_for(&e));
    }
    ExitCode::from(0)
}

/// Planning refusals carry their own code; everything else is a runtime failure.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<PlanError>()
        .map(PlanError::exit_code)
        .unwrap_or(1)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file_config = config::load_or_default(cli.config.as_deref(), Utf8Path::new("."))
        .context("load rally.toml config")?;
    match cli.cmd {
        Command::Plan(args) => {
            let merged = merge(file_config, &args.output);
            cmd_plan(args, merged)
        }
        Command::Demo(args) => {
            let merged = merge(file_config, &args.output);
            cmd_demo(merged)
        }
    }
}

fn merge(file_config: config::RallyConfig, output: &OutputArgs) -> MergedConfig {
    let merged = ConfigMerger::new(file_config).merge(
        output.max_daily_distance,
        output.format.map(RenderFormat::from),
    );
    debug!(
        "merged config: max_daily_distance={}, format={}",
        merged.max_daily_distance, merged.format
    );
    merged
}

fn planner_for(merged: &MergedConfig) -> Planner {
    Planner::with_config(PlannerConfig {
        max_daily_distance: merged.max_daily_distance,
    })
}

fn cmd_plan(args: PlanArgs, merged: MergedConfig) -> anyhow::Result<()> {
    let route = FsRouteSource::new(args.route)
        .load_route()
        .context("load route")?;

    let plan = planner_for(&merged).make_plan(&route)?;
    print!("{}", renderer_for(merged.format).render(&plan)?);

    if let Some(out_dir) = args.out_dir {
        write_artifacts(&out_dir, &plan)?;
        info!("wrote plan to {}", out_dir);
    }
    Ok(())
}

fn cmd_demo(merged: MergedConfig) -> anyhow::Result<()> {
    let route: Vec<Waypoint> = demo_route();

    let started = Instant::now();
    let plan = planner_for(&merged).make_plan(&route)?;
    let elapsed = started.elapsed();

    print!("{}", renderer_for(merged.format).render(&plan)?);
    let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    info!(elapsed_us, "planned demo route");
    // Keep JSON output machine-readable.
    if merged.format != RenderFormat::Json {
        println!("Execution time: {} ms", elapsed.as_millis());
    }
    Ok(())
}

fn write_artifacts(out_dir: &Utf8Path, plan: &RallyPlan) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir))?;
    let json_path = out_dir.join("plan.json");
    fs::write(&json_path, render_plan_json(plan)?)
        .with_context(|| format!("write {}", json_path))?;
    let md_path = out_dir.join("plan.md");
    fs::write(&md_path, render_plan_md(plan)).with_context(|| format!("write {}", md_path))?;
    Ok(())
}
