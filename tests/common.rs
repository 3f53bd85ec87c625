#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mk() -> Command {
    cargo_bin_cmd!("motokm")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_motokm.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_motokm_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB in test mode (no config file is touched) and register a rider.
pub fn init_with_profile(db_path: &str) {
    mk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    mk().args([
        "--db",
        db_path,
        "register",
        "--name",
        "Ana Souza",
        "--company",
        "Rapido Express",
        "--model",
        "CG 160",
        "--plate",
        "abc1d23",
    ])
    .assert()
    .success();
}

/// `start` / `end` at a fixed local time with a typed reading.
pub fn capture(db_path: &str, cmd: &str, at: &str, km: &str) {
    mk().args(["--db", db_path, cmd, "--km", km, "--at", at])
        .assert()
        .success();
}

/// Two closed shifts on 3 June 2024: 100→150 and 150→210 (110 km).
/// The second start needs --force: one start per day is the default.
pub fn two_shifts_in_june(db_path: &str) {
    capture(db_path, "start", "2024-06-03 08:00", "100");
    capture(db_path, "end", "2024-06-03 12:00", "150");
    mk().args([
        "--db",
        db_path,
        "start",
        "--km",
        "150",
        "--at",
        "2024-06-03 13:00",
        "--force",
    ])
    .assert()
    .success();
    capture(db_path, "end", "2024-06-03 18:00", "210");
}
