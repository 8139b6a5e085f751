use assert_cmd::Command;
use predicates::prelude::*;

fn optimize_args(extra: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = [
        "--from",
        "earth",
        "--to",
        "mars",
        "--site",
        "KSC",
        "--start",
        "2025-01-01",
        "--end",
        "2025-01-29",
        "--vehicle",
        "Falcon Heavy",
        "--payload-kg",
        "1000",
        "--seed",
        "7",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    args.extend(extra.iter().map(|s| s.to_string()));
    args
}

#[test]
fn optimize_prints_a_report_for_the_builtin_catalog() {
    Command::cargo_bin("optimize")
        .expect("optimize bin")
        .args(optimize_args(&[]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Launch Window Report"))
        .stdout(predicate::str::contains("Best launch"))
        .stdout(predicate::str::contains("Optimal windows"));
}

#[test]
fn optimize_rejects_unknown_vehicles() {
    Command::cargo_bin("optimize")
        .expect("optimize bin")
        .args(optimize_args(&["--vehicle", "Saturn V"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog"));
}

#[test]
fn optimize_prints_the_manifest_when_asked() {
    Command::cargo_bin("optimize")
        .expect("optimize bin")
        .args(optimize_args(&["--manifest"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Mission Manifest"))
        .stdout(predicate::str::contains("Earth to Mars Transfer"));
}

#[test]
fn optimize_exports_ranked_windows_as_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("windows.csv");

    Command::cargo_bin("optimize")
        .expect("optimize bin")
        .args(optimize_args(&["--csv", csv_path.to_str().unwrap()]))
        .assert()
        .success();

    let text = std::fs::read_to_string(&csv_path).expect("csv written");
    let mut lines = text.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("rank,launch_date,arrival_date"));
    // Five candidates in the range, all surviving the capability filter.
    assert_eq!(lines.count(), 5);
}

#[test]
fn optimize_exports_the_full_result_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("result.json");

    Command::cargo_bin("optimize")
        .expect("optimize bin")
        .args(optimize_args(&["--json", json_path.to_str().unwrap()]))
        .assert()
        .success();

    let text = std::fs::read_to_string(&json_path).expect("json written");
    assert!(text.contains("\"optimal_windows\""));
    assert!(text.contains("\"real_launches\""));
}
