#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME/APPDATA pointed at a scratch directory so a
/// developer's own ~/.triplog never leaks into the run.
pub fn tl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("triplog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("triplog");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_triplog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    tl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_trip(db_path: &str, name: &str, category: &str, start: &str, end: &str) {
    tl().args([
        "--db", db_path, "add", name, "--category", category, "--start", start, "--end", end,
    ])
    .assert()
    .success();
}

/// Initialize DB and add three trips: one past, one current and one
/// upcoming relative to 2024-06-05. Ids are 1, 2, 3 in that order.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_trip(db_path, "Ski week", "Adventure", "2024-01-01", "2024-01-05");
    add_trip(db_path, "Lisbon", "Vacation", "2024-06-01", "2024-06-10");
    add_trip(db_path, "Conference", "Business", "2024-10-01", "2024-10-03");
}
