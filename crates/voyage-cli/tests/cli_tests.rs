use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a `vy` invocation against a throwaway database, in plain text mode
/// so assertions see raw markdown.
fn vy(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vy").expect("Binary should build");
    cmd.arg("--database-file").arg(db_path).arg("--no-color");
    cmd
}

fn test_db() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("vy-test.db");
    (temp_dir, db_path)
}

fn create_paris(db_path: &Path) {
    vy(db_path)
        .args(["plan", "create", "Paris", "--from", "2024-06-01", "--to", "2024-06-03"])
        .assert()
        .success();
}

#[test]
fn test_bare_invocation_lists_empty() {
    let (_temp_dir, db_path) = test_db();

    vy(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans yet."));
}

#[test]
fn test_plan_create_reports_assigned_id() {
    let (_temp_dir, db_path) = test_db();

    vy(&db_path)
        .args(["plan", "create", "Paris", "--from", "2024-06-01", "--to", "2024-06-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("Paris"));
}

#[test]
fn test_plan_create_rejects_inverted_range() {
    let (_temp_dir, db_path) = test_db();

    vy(&db_path)
        .args(["plan", "create", "Backwards", "--from", "2024-06-03", "--to", "2024-06-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end date must not be before start date"));
}

#[test]
fn test_plan_list_shows_created_plan() {
    let (_temp_dir, db_path) = test_db();
    create_paris(&db_path);

    vy(&db_path)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris (ID: 1)"))
        .stdout(predicate::str::contains("Tasks: 0"));
}

#[test]
fn test_task_add_and_show_itinerary() {
    let (_temp_dir, db_path) = test_db();
    create_paris(&db_path);

    vy(&db_path)
        .args([
            "task", "add", "1", "Louvre",
            "--date", "2024-06-02",
            "--start", "09:00",
            "--end", "10:30",
            "--cost", "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task with ID:"))
        .stdout(predicate::str::contains("1h 30m"));

    vy(&db_path)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun Jun 02 2024"))
        .stdout(predicate::str::contains("09:00 - 10:30"))
        .stdout(predicate::str::contains("Budget: $20.00"));
}

#[test]
fn test_task_add_outside_trip_window_fails() {
    let (_temp_dir, db_path) = test_db();
    create_paris(&db_path);

    vy(&db_path)
        .args([
            "task", "add", "1", "Straggler",
            "--date", "2024-06-04",
            "--start", "09:00",
            "--end", "10:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task date must fall within the trip duration"));
}

#[test]
fn test_task_remove_unknown_id_reports_miss() {
    let (_temp_dir, db_path) = test_db();
    create_paris(&db_path);

    vy(&db_path)
        .args(["task", "remove", "1", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task with ID 42 in plan 1."));
}

#[test]
fn test_plan_show_missing_id_fails() {
    let (_temp_dir, db_path) = test_db();

    vy(&db_path)
        .args(["plan", "show", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 9 not found"));
}

#[test]
fn test_plan_delete_requires_confirmation() {
    let (_temp_dir, db_path) = test_db();
    create_paris(&db_path);

    vy(&db_path)
        .args(["plan", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));

    vy(&db_path)
        .args(["plan", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan 'Paris' (ID: 1)"));

    vy(&db_path)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans yet."));
}

#[test]
fn test_plan_edit_updates_title() {
    let (_temp_dir, db_path) = test_db();
    create_paris(&db_path);

    vy(&db_path)
        .args(["plan", "edit", "1", "--title", "Paris in June"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan with ID: 1"))
        .stdout(predicate::str::contains("Paris in June"));
}
