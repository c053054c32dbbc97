use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_displays_usage() {
    Command::cargo_bin("spanpack")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn solve_prints_the_best_range() {
    Command::cargo_bin("spanpack")
        .expect("binary exists")
        .args([
            "solve",
            "--capacity",
            "5",
            "--item",
            "2:5",
            "--item",
            "3:8",
            "--item",
            "4:3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("items 0..=1 (2 items)"))
        .stdout(predicate::str::contains("total weight    13.0"));
}

#[test]
fn solve_reports_when_nothing_fits() {
    Command::cargo_bin("spanpack")
        .expect("binary exists")
        .args(["solve", "--capacity", "5", "--item", "6:10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "no contiguous selection fits within capacity 5",
        ));
}

#[test]
fn solve_emits_json() {
    Command::cargo_bin("spanpack")
        .expect("binary exists")
        .args([
            "solve", "--capacity", "5", "--item", "2:5", "--item", "3:8", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start_index\": 0"))
        .stdout(predicate::str::contains("\"total_weight\": 13.0"));
}

#[test]
fn solve_emits_json_null_when_nothing_fits() {
    Command::cargo_bin("spanpack")
        .expect("binary exists")
        .args(["solve", "--capacity", "5", "--item", "6:10", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}

#[test]
fn malformed_item_specs_are_rejected() {
    Command::cargo_bin("spanpack")
        .expect("binary exists")
        .args(["solve", "--capacity", "5", "--item", "2,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected VOLUME:WEIGHT"));
}

#[test]
fn completions_cover_the_solve_subcommand() {
    Command::cargo_bin("spanpack")
        .expect("binary exists")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solve"));
}
