mod common;
use common::{init_with_data, setup_data_dir, temp_out, trl};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_export_csv_all() {
    let data_dir = setup_data_dir("export_csv_all");
    init_with_data(&data_dir);

    let out = temp_out("export_csv_all", "csv");

    trl()
        .args(["--data-dir", &data_dir, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,sport,duration_min"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    // load column: 30 * 7
    assert!(content.contains(",210,"));
    assert!(content.contains("\"legs, then \"\"core\"\"\""));
}

#[test]
fn test_export_json_range() {
    let data_dir = setup_data_dir("export_json_range");
    init_with_data(&data_dir);

    let out = temp_out("export_json_range", "json");

    trl()
        .args([
            "--data-dir", &data_dir, "export", "--format", "json", "--file", &out, "--range",
            "2025-09-10:2025-09-30",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of sessions");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2025-09-15");
    assert_eq!(rows[0]["sport"], "Gym");
    assert_eq!(rows[0]["load"], 225);
    assert!(rows[0]["rpe"].is_null());
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let data_dir = setup_data_dir("export_empty_range");
    init_with_data(&data_dir);

    let out = temp_out("export_empty_range", "json");

    trl()
        .args([
            "--data-dir", &data_dir, "export", "--format", "json", "--file", &out, "--range",
            "2020",
        ])
        .assert()
        .success()
        .stdout(contains("No sessions found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_xlsx_and_pdf() {
    let data_dir = setup_data_dir("export_xlsx_pdf");
    init_with_data(&data_dir);

    let xlsx = temp_out("export_xlsx_pdf", "xlsx");
    trl()
        .args(["--data-dir", &data_dir, "export", "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success();
    let bytes = fs::read(&xlsx).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));

    let pdf = temp_out("export_xlsx_pdf", "pdf");
    trl()
        .args([
            "--data-dir", &data_dir, "export", "--format", "pdf", "--file", &pdf, "--range",
            "2025-09",
        ])
        .assert()
        .success();
    let bytes = fs::read(&pdf).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_relative_path_fails() {
    let data_dir = setup_data_dir("export_relative_path");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let data_dir = setup_data_dir("export_force");
    init_with_data(&data_dir);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed output");

    trl()
        .args(["--data-dir", &data_dir, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read");
    assert!(!content.contains("old content"));
}

#[test]
fn test_weekly_report_default_location() {
    let data_dir = setup_data_dir("report_default");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "report", "--week", "2025-09-17"])
        .assert()
        .success()
        .stdout(contains("Weekly report written"));

    let report = Path::new(&data_dir)
        .join("Reports")
        .join("week_2025-09-15.pdf");
    let bytes = fs::read(&report).expect("read report");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_weekly_report_empty_week_to_file() {
    let data_dir = setup_data_dir("report_empty_week");
    init_with_data(&data_dir);

    let out = temp_out("report_empty_week", "pdf");
    trl()
        .args([
            "--data-dir", &data_dir, "report", "--week", "2024-01-03", "--file", &out,
        ])
        .assert()
        .success();

    assert!(Path::new(&out).exists());
}

#[test]
fn test_backup_default_and_compressed() {
    let data_dir = setup_data_dir("backup_cli");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "backup"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let backups: Vec<_> = fs::read_dir(Path::new(&data_dir).join("Backups"))
        .expect("backup dir")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(backups.len(), 1);
    let name = backups[0].file_name().to_string_lossy().to_string();
    assert!(name.starts_with("training_log_") && name.ends_with(".csv"));

    let out = temp_out("backup_cli", "csv");
    let zipped = temp_out("backup_cli", "zip");
    trl()
        .args(["--data-dir", &data_dir, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(Path::new(&zipped).exists());
    assert!(!Path::new(&out).exists());
}
