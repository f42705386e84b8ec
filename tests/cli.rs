use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const CSV: &str = "\
id,title,duration_min,completion_rate,new_listeners,returning_listeners,subscribers,social_shares,subscribers_gained
E1,Pilot,32,78,120,40,160,12,25
E2,Scaling Rust,48,64,150,90,230,30,70
E3,Interview,61,55,90,130,280,18,50
E4,Async,40,70,110,120,340,22,60
";

fn write_csv(dir: &Path) -> PathBuf {
    let path = dir.join("episodes.csv");
    fs::write(&path, CSV).unwrap();
    path
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("podstats").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("podstats"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn render_help_describes_each_chart() {
    let mut cmd = Command::cargo_bin("podstats").unwrap();
    cmd.args(["render", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("listener-mix"))
        .stdout(predicate::str::contains("stacked bars"));
}

#[test]
fn render_writes_svg() {
    let dir = tempdir().unwrap();
    let input = write_csv(dir.path());
    let out = dir.path().join("mix.svg");

    let mut cmd = Command::cargo_bin("podstats").unwrap();
    cmd.args(["render", "--chart", "listener-mix", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote chart"));
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn frame_replays_events() {
    let dir = tempdir().unwrap();
    let input = write_csv(dir.path());
    let events = dir.path().join("events.json");
    fs::write(
        &events,
        r#"[{"type": "wheel", "delta": -500, "x": 382, "y": 196}]"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("podstats").unwrap();
    cmd.args(["frame", "--chart", "duration-completion", "--input"])
        .arg(&input)
        .arg("--events")
        .arg(&events);
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let frame: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(frame["kind"], "duration-completion");
    assert_eq!(frame["zoom_level"], 2.0);
}

#[test]
fn stats_lists_each_metric() {
    let dir = tempdir().unwrap();
    let input = write_csv(dir.path());

    let mut cmd = Command::cargo_bin("podstats").unwrap();
    cmd.args(["stats", "--input"]).arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("duration_min"))
        .stdout(predicate::str::contains("count=4"))
        .stdout(predicate::str::contains("median=44"));
}

#[test]
fn bad_config_fails_with_message() {
    let dir = tempdir().unwrap();
    let input = write_csv(dir.path());

    let mut cmd = Command::cargo_bin("podstats").unwrap();
    cmd.args(["frame", "--chart", "subscriber-growth"])
        .args(["--height", "10", "--input"])
        .arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("height"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("podstats").unwrap();
    cmd.args(["stats", "--input"]).arg(dir.path().join("missing.csv"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading episodes"));
}
