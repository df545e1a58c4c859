#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("escala-cli").unwrap()
}

#[test]
fn status_prints_label() {
    cli()
        .args(["status", "--date", "06/10/2025", "--roster", "ALFA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FOLGA"));
}

#[test]
fn infer_from_observed_day() {
    cli()
        .args(["infer", "--date", "04/10/2025", "--off"])
        .assert()
        .success()
        .stdout("BRAVO\n");
    cli()
        .args(["infer", "--date", "06/10/2025", "--working"])
        .assert()
        .success()
        .stdout("BRAVO\n");
}

#[test]
fn invalid_roster_fails() {
    cli()
        .args(["status", "--date", "06/10/2025", "--roster", "GAMMA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roster"));
}

#[test]
fn malformed_date_fails() {
    cli()
        .args(["status", "--date", "2025-10-06", "--roster", "BRAVO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn next_off_and_holidays() {
    cli()
        .args(["next-off", "--date", "06/10/2025", "--roster", "BRAVO"])
        .assert()
        .success()
        .stdout("07/10/2025\n");
    cli()
        .args(["holidays", "--year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16/02/2026 | Carnaval"));
}

#[test]
fn non_monday_reference_warns() {
    cli()
        .args([
            "--reference",
            "07/10/2025",
            "status",
            "--date",
            "07/10/2025",
            "--roster",
            "ALFA",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a Monday"));
}

#[test]
fn infer_requires_observed_status() {
    cli()
        .args(["infer", "--date", "06/10/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--off"));
    cli()
        .args(["infer", "--date", "06/10/2025", "--off", "--working"])
        .assert()
        .failure();
}

#[test]
fn roster_names_are_normalized_by_the_cli() {
    cli()
        .args(["status", "--date", "07/10/2025", "--roster", " bravo "])
        .assert()
        .success()
        .stdout("07/10/2025  Ter  BRAVO  FOLGA\n");
}

#[test]
fn period_prints_and_exports() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("period.json");
    let csv = dir.path().join("period.csv");

    cli()
        .args(["period", "--start", "06/10/2025", "--end", "08/10/2025", "--roster", "ALFA"])
        .arg("--out-json")
        .arg(&json)
        .arg("--out-csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(
            "06/10/2025  Seg  ALFA   FOLGA\n\
             07/10/2025  Ter  ALFA   TRABALHA\n\
             08/10/2025  Qua  ALFA   FOLGA\n",
        );

    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&json).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[1]["status"], "work");

    let csv = std::fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "06/10/2025,Seg,ALFA,FOLGA,");
}

#[test]
fn period_rejects_reversed_range() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("period.json");

    cli()
        .args(["period", "--start", "10/10/2025", "--end", "06/10/2025", "--roster", "BRAVO"])
        .arg("--out-json")
        .arg(&json)
        .assert()
        .failure()
        .stderr(predicate::str::contains("fin"));
    assert!(!json.exists());
}
