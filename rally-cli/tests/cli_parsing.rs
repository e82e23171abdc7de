//! End-to-end tests for the `rally` binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rally() -> Command {
    let mut cmd = Command::cargo_bin("rally").expect("rally binary");
    cmd.env_remove("RALLY_MAX_DAILY_DISTANCE");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn create_temp_route(contents: &str, file_name: &str) -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    fs::write(td.path().join(file_name), contents).unwrap();
    td
}

const SAMPLE_ROUTE: &str = r#"[
  { "id": "Start", "distance_to_next": 10 },
  { "id": "B", "distance_to_next": 30 },
  { "id": "C", "distance_to_next": 25 },
  { "id": "D", "distance_to_next": 5 },
  { "id": "Last", "distance_to_next": 48 }
]"#;

#[test]
fn test_plan_prints_table_by_default() {
    let temp = create_temp_route(SAMPLE_ROUTE, "route.json");

    rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "route.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RALLY PLAN"))
        .stdout(predicate::str::contains("| C                    |        2  |"))
        .stdout(predicate::str::contains("| Last                 |        3  |"));
}

#[test]
fn test_plan_json_output_is_parseable() {
    let temp = create_temp_route(SAMPLE_ROUTE, "route.json");

    let out = rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "route.json", "--format", "json"])
        .output()
        .expect("run");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json stdout");
    assert_eq!(v["schema"], "rally.plan.v1");
    assert_eq!(v["summary"]["days_total"], 3);
    assert_eq!(v["entries"][2]["waypoint"]["id"], "C");
    assert_eq!(v["entries"][2]["day"], 2);
}

#[test]
fn test_plan_leg_too_long_exits_2_and_names_waypoint() {
    let temp = create_temp_route(
        r#"[{ "id": "Start", "distance_to_next": 10 }, { "id": "Desert", "distance_to_next": 51 }]"#,
        "route.json",
    );

    rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "route.json"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Desert"));
}

#[test]
fn test_plan_missing_route_exits_1() {
    let temp = tempfile::tempdir().unwrap();

    rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "nope.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_plan_requires_route() {
    rally().arg("plan").assert().failure();
}

#[test]
fn test_plan_toml_route_with_custom_limit() {
    let temp = create_temp_route(
        r#"
[[waypoint]]
id = "A"
distance_to_next = 10

[[waypoint]]
id = "B"
distance_to_next = 15
"#,
        "route.toml",
    );

    rally()
        .current_dir(temp.path())
        .args([
            "plan",
            "--route",
            "route.toml",
            "--max-daily-distance",
            "20",
            "--format",
            "markdown",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Max daily distance: 20 km"))
        .stdout(predicate::str::contains("### Day 2"));
}

#[test]
fn test_config_file_sets_defaults_and_cli_overrides() {
    let temp = create_temp_route(SAMPLE_ROUTE, "route.json");
    fs::write(
        temp.path().join("rally.toml"),
        "[planner]\nmax_daily_distance = 100\n\n[render]\nformat = \"markdown\"\n",
    )
    .unwrap();

    rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "route.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Max daily distance: 100 km"))
        .stdout(predicate::str::contains("- Days: 2"));

    rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "route.json", "--max-daily-distance", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Days: 3"));
}

#[test]
fn test_invalid_config_exits_1() {
    let temp = create_temp_route(SAMPLE_ROUTE, "route.json");
    fs::write(temp.path().join("rally.toml"), "[planner\n").unwrap();

    rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "route.json"])
        .assert()
        .code(1);
}

#[test]
fn test_out_dir_writes_artifacts() {
    let temp = create_temp_route(SAMPLE_ROUTE, "route.json");

    rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "route.json", "--out-dir", "out"])
        .assert()
        .success();

    let plan_json = fs::read_to_string(temp.path().join("out").join("plan.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&plan_json).unwrap();
    assert_eq!(v["entries"].as_array().map(|a| a.len()), Some(5));

    let plan_md = fs::read_to_string(temp.path().join("out").join("plan.md")).unwrap();
    assert!(plan_md.starts_with("# rally plan"));
}

#[test]
fn test_out_dir_plan_json_matches_json_stdout() {
    let temp = create_temp_route(SAMPLE_ROUTE, "route.json");

    let out = rally()
        .current_dir(temp.path())
        .args(["plan", "--route", "route.json", "--format", "json", "--out-dir", "out"])
        .output()
        .expect("run");
    assert!(out.status.success());

    let written = fs::read(temp.path().join("out").join("plan.json")).unwrap();
    assert_eq!(written, out.stdout);
}

#[test]
fn test_demo_prints_plan_and_timing() {
    let temp = tempfile::tempdir().unwrap();

    rally()
        .current_dir(temp.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Starting line        |        1  |"))
        .stdout(predicate::str::contains("| Last before end      |        3  |"))
        .stdout(predicate::str::contains("Execution time:"));
}

#[test]
fn test_demo_json_output_has_no_timing_line() {
    let temp = tempfile::tempdir().unwrap();

    let out = rally()
        .current_dir(temp.path())
        .args(["demo", "--format", "json"])
        .output()
        .expect("run");
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    assert!(!stdout.contains("Execution time:"));
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("json stdout");
    assert_eq!(v["entries"][0]["waypoint"]["id"], "Starting line");
    assert_eq!(v["summary"]["days_total"], 3);
}

#[test]
fn test_demo_with_small_limit_fails() {
    let temp = tempfile::tempdir().unwrap();

    rally()
        .current_dir(temp.path())
        .args(["demo", "--max-daily-distance", "40"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Last before end"));
}
