#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("corvee-cli").unwrap();
    cmd.arg("--store").arg(store).env_remove("CORVEE_STORE");
    cmd
}

#[test]
fn add_dates_show_and_export() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("weekly.json");

    for name in ["A", "B"] {
        cli(&store).args(["add", "--name", name]).assert().success();
    }
    cli(&store)
        .args(["dates", "--start", "2025-06-16", "--end", "2025-06-22"])
        .assert()
        .success();

    cli(&store)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-20 | Friday    | A | #17a2b8"))
        .stdout(predicate::str::contains("2025-06-21").not());

    let out = dir.path().join("weekly.csv");
    cli(&store)
        .args(["export", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported 5 event(s)"));
    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Title,Day,StartDate\nA,Monday,2025-06-16\n"));
}

#[test]
fn duplicate_name_is_rejected() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("s.json");
    cli(&store).args(["add", "--name", "A"]).assert().success();
    cli(&store)
        .args(["add", "--name", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate name"));
}

#[test]
fn inverted_dates_are_rejected() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("s.json");
    cli(&store)
        .args(["dates", "--start", "2025-07-01", "--end", "2025-06-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dates"));
}

#[test]
fn empty_roster_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("s.json");
    cli(&store).arg("show").assert().code(2);
    cli(&store)
        .args(["show", "--placeholder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unassigned"));
}

#[test]
fn reorder_changes_rotation() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("s.json");
    for name in ["A", "B", "C"] {
        cli(&store).args(["add", "--name", name]).assert().success();
    }
    cli(&store).args(["reorder", "--name", "C", "A", "B"]).assert().success();
    cli(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 | C\n1 | A\n2 | B\n"));
}

#[test]
fn reorder_handles_names_with_commas() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("s.json");
    for name in ["Doe, John", "Ann"] {
        cli(&store).args(["add", "--name", name]).assert().success();
    }
    cli(&store)
        .args(["reorder", "--name", "Ann", "--name", "Doe, John"])
        .assert()
        .success();
    cli(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 | Ann\n1 | Doe, John\n"));
}

#[test]
fn remove_and_rename_by_name() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("s.json");
    for name in ["A", "B", "C"] {
        cli(&store).args(["add", "--name", name]).assert().success();
    }
    cli(&store)
        .args(["rename", "--name", "B", "--to", "Bea"])
        .assert()
        .success();
    cli(&store)
        .args(["remove", "--name", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed A"));
    cli(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 | Bea\n1 | C\n"));

    cli(&store)
        .args(["remove", "--name", "Zed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown participant: Zed"));
    cli(&store)
        .args(["remove", "--position", "0", "--name", "C"])
        .assert()
        .failure();
}
