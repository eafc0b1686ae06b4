//! Integration tests for the `day` CLI.
//!
//! Each test creates a temp store directory, runs `day` as a subprocess,
//! and verifies stdout and/or file contents.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `day` binary.
fn day_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("day");
    path
}

fn day(dir: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(day_bin())
        .arg("-C")
        .arg(dir.path())
        .args(args)
        .output()
        .expect("failed to run day")
}

#[test]
fn init_creates_store_and_config() {
    let dir = TempDir::new().unwrap();
    let out = day(&dir, &["init"]);
    assert!(out.status.success());
    assert!(dir.path().join("tasks.json").exists());
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn init_refuses_existing_store() {
    let dir = TempDir::new().unwrap();
    assert!(day(&dir, &["init"]).status.success());
    let out = day(&dir, &["init"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("already exists"));
}

#[test]
fn add_then_list_shows_items_in_order() {
    let dir = TempDir::new().unwrap();
    assert!(day(&dir, &["init"]).status.success());
    assert!(day(&dir, &["add", "write", "the", "report"]).status.success());
    assert!(day(&dir, &["add", "walk"]).status.success());

    let out = day(&dir, &["list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let report_pos = stdout.find("write the report").unwrap();
    let walk_pos = stdout.find("walk").unwrap();
    assert!(report_pos < walk_pos);
}

#[test]
fn list_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    assert!(day(&dir, &["init"]).status.success());
    assert!(day(&dir, &["add", "task one"]).status.success());

    let out = day(&dir, &["list", "--json"]);
    assert!(out.status.success());
    let items: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(items[0]["title"], "task one");
    assert_eq!(items[0]["status"], "pending");
}

#[test]
fn list_on_empty_store_says_so() {
    let dir = TempDir::new().unwrap();
    assert!(day(&dir, &["init"]).status.success());
    let out = day(&dir, &["list"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("nothing for today"));
}
