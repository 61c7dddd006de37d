//! Integration tests for the `jot` CLI.
//!
//! Each test points `jot` at a store file inside a temp directory, runs it
//! as a subprocess, and checks stdout and/or the store file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use jot::model::Todo;
use pretty_assertions::assert_eq;

/// Get the path to the built `jot` binary.
fn jot_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("jot");
    path
}

/// Run `jot` against the store in `dir`, returning (stdout, stderr, success).
fn run_jot(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let store = dir.join("store.json");
    let output = Command::new(jot_bin())
        .args(args)
        .arg("--store")
        .arg(&store)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env_remove("JOT_LOG")
        .output()
        .expect("failed to run jot");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `jot` expecting success, return stdout.
fn run_jot_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_jot(dir, args);
    if !success {
        panic!(
            "jot {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Decode the `todos` entry of the store file.
fn stored_todos(dir: &Path) -> Vec<Todo> {
    let content = fs::read_to_string(dir.join("store.json")).unwrap();
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content).unwrap();
    let raw = map["todos"].as_str().unwrap();
    serde_json::from_str(raw).unwrap()
}

fn add(dir: &Path, text: &str) -> String {
    run_jot_ok(dir, &["add", text]).trim().to_string()
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn test_add_two_in_order() {
    let tmp = tempfile::TempDir::new().unwrap();
    let a = add(tmp.path(), "Buy milk");
    let b = add(tmp.path(), "Walk dog");
    assert_ne!(a, b);

    assert_eq!(
        stored_todos(tmp.path()),
        vec![Todo::new(a, "Buy milk"), Todo::new(b, "Walk dog")]
    );
}

#[test]
fn test_add_blank_does_not_write() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (stdout, stderr, success) = run_jot(tmp.path(), &["add", "   "]);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("nothing to add"));
    assert!(!tmp.path().join("store.json").exists());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn test_list_empty_store() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_jot_ok(tmp.path(), &["list"]);
    assert_eq!(out.trim(), "Data Not Found!");
}

#[test]
fn test_list_search_is_case_insensitive() {
    let tmp = tempfile::TempDir::new().unwrap();
    let a = add(tmp.path(), "Buy Milk");
    add(tmp.path(), "Walk dog");

    let out = run_jot_ok(tmp.path(), &["list", "--search", "milk"]);
    assert_eq!(out.trim(), format!("{}  Buy Milk", a));

    let out = run_jot_ok(tmp.path(), &["list", "--search", ""]);
    assert_eq!(out.lines().count(), 2);

    let out = run_jot_ok(tmp.path(), &["list", "--search", "zebra"]);
    assert_eq!(out.trim(), "Data Not Found!");
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    add(tmp.path(), "Buy milk");
    add(tmp.path(), "Walk dog");

    let out = run_jot_ok(tmp.path(), &["list", "--json"]);
    let parsed: Vec<Todo> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, stored_todos(tmp.path()));

    let out = run_jot_ok(tmp.path(), &["list", "--json", "-s", "nothing"]);
    let parsed: Vec<Todo> = serde_json::from_str(&out).unwrap();
    assert!(parsed.is_empty());
}

// ---------------------------------------------------------------------------
// Edit / delete
// ---------------------------------------------------------------------------

#[test]
fn test_edit_changes_only_target() {
    let tmp = tempfile::TempDir::new().unwrap();
    let a = add(tmp.path(), "Buy milk");
    let b = add(tmp.path(), "Walk dog");

    run_jot_ok(tmp.path(), &["edit", &a, "Buy oat milk"]);
    assert_eq!(
        stored_todos(tmp.path()),
        vec![Todo::new(a, "Buy oat milk"), Todo::new(b, "Walk dog")]
    );
}

#[test]
fn test_edit_unknown_id_is_noop() {
    let tmp = tempfile::TempDir::new().unwrap();
    let a = add(tmp.path(), "Buy milk");
    let (_, stderr, success) = run_jot(tmp.path(), &["edit", "missing", "x"]);
    assert!(success);
    assert!(stderr.contains("no todo with id missing"));
    assert_eq!(stored_todos(tmp.path()), vec![Todo::new(a, "Buy milk")]);
}

#[test]
fn test_delete() {
    let tmp = tempfile::TempDir::new().unwrap();
    let a = add(tmp.path(), "a");
    let b = add(tmp.path(), "b");
    let c = add(tmp.path(), "c");

    run_jot_ok(tmp.path(), &["delete", &b]);
    assert_eq!(
        stored_todos(tmp.path()),
        vec![Todo::new(a.clone(), "a"), Todo::new(c.clone(), "c")]
    );

    run_jot_ok(tmp.path(), &["delete", "missing"]);
    assert_eq!(
        stored_todos(tmp.path()),
        vec![Todo::new(a, "a"), Todo::new(c, "c")]
    );
}

// ---------------------------------------------------------------------------
// Failure handling
// ---------------------------------------------------------------------------

#[test]
fn test_corrupt_store_lists_as_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("store.json"),
        r#"{"todos": "this is not a list"}"#,
    )
    .unwrap();

    let (stdout, stderr, success) = run_jot(tmp.path(), &["list"]);
    assert!(success);
    assert_eq!(stdout.trim(), "Data Not Found!");
    assert!(stderr.contains("could not load todos"));
}

#[test]
fn test_add_over_corrupt_store_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("store.json"), "not json {{{").unwrap();

    let (stdout, _, success) = run_jot(tmp.path(), &["add", "Buy milk"]);
    assert!(success);
    let id = stdout.trim().to_string();
    assert_eq!(stored_todos(tmp.path()), vec![Todo::new(id, "Buy milk")]);
    assert_eq!(
        fs::read_to_string(tmp.path().join("store.json.bak")).unwrap(),
        "not json {{{"
    );
}

#[test]
fn test_malformed_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config_dir = tmp.path().join("config/jot");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[store\n").unwrap();

    let (_, stderr, success) = run_jot(tmp.path(), &["list"]);
    assert!(!success);
    assert!(stderr.starts_with("error: could not parse"));
}
