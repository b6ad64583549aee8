use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_apply_moves_single_item_up() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("reorder")
        .env("REORDER_HOME", dir.path())
        .args(["apply", "select:3", "up"])
        .assert()
        .success()
        .stdout(
            "[ ] list item A\n[ ] list item B\n[x] list item D\n[ ] list item C\n[ ] list item E\n\
             move up/down: on, reset: on\n",
        );
}

#[test]
fn test_apply_with_custom_items() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("reorder")
        .env("REORDER_HOME", dir.path())
        .args(["apply", "--items", "A,B,C,D,E", "select:0", "select:2", "down"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[ ] B\n[ ] D\n[x] A\n[x] C\n[ ] E\n",
        ));
}

#[test]
fn test_apply_json_output() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("reorder")
        .env("REORDER_HOME", dir.path())
        .args(["apply", "--json", "--items", "A,B,C,D,E", "select:0", "select:2", "down"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["order"], serde_json::json!([1, 3, 0, 2, 4]));
    assert_eq!(json["selected"], serde_json::json!([0, 2]));
    assert_eq!(json["rows"][0]["value"], "B");
}

#[test]
fn test_apply_reset() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("reorder")
        .env("REORDER_HOME", dir.path())
        .args(["apply", "--json", "select:1", "down", "reset"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["order"].is_null());
    assert_eq!(json["selected"], serde_json::json!([]));
    assert_eq!(json["can_reset"], false);
}

#[test]
fn test_apply_uses_items_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "items = [\"x\", \"y\"]\n").unwrap();

    cargo_bin_cmd!("reorder")
        .env("REORDER_HOME", dir.path())
        .args(["apply", "select:1", "up"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[x] y\n[ ] x\n"));
}

#[test]
fn test_apply_rejects_unknown_action() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("reorder")
        .env("REORDER_HOME", dir.path())
        .args(["apply", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown action"));
}

#[test]
fn test_apply_ignores_out_of_range_selection() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("reorder")
        .env("REORDER_HOME", dir.path())
        .args(["apply", "--items", "A,B", "select:9", "up"])
        .assert()
        .success()
        .stdout("[ ] A\n[ ] B\nmove up/down: off, reset: off\n");
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("reorder")
        .env("REORDER_HOME", dir.path())
        .args(["apply", "--log-level", "debug", "--items", "A,B", "select:1", "up"])
        .assert()
        .success()
        .stdout("[x] B\n[ ] A\nmove up/down: on, reset: on\n")
        .stderr(predicate::str::contains("reordered selection"));
}
