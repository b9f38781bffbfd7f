#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use trainlog::models::{SessionEntry, Sport};

pub fn trl() -> Command {
    cargo_bin_cmd!("trainlog")
}

/// Create a unique, empty data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trainlog", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a data dir and log a small dataset useful for many tests
pub fn init_with_data(data_dir: &str) {
    trl()
        .args(["--data-dir", data_dir, "--test", "init"])
        .assert()
        .success();

    trl()
        .args([
            "--data-dir",
            data_dir,
            "add",
            "2025-09-01",
            "Running",
            "30",
            "--rpe",
            "7",
            "--distance",
            "6,5",
        ])
        .assert()
        .success();

    trl()
        .args([
            "--data-dir",
            data_dir,
            "add",
            "2025-09-15",
            "Gym",
            "45",
            "--note",
            "legs, then \"core\"",
        ])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Entry built in memory, bypassing validation.
pub fn entry(id: &str, day: &str, sport: Sport, minutes: u32, rpe: Option<u8>) -> SessionEntry {
    SessionEntry {
        id: id.to_string(),
        date: date(day),
        sport,
        duration_minutes: minutes,
        calories: None,
        distance_km: None,
        rpe,
        avg_heart_rate: None,
        note: String::new(),
    }
}
