use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_with_data, setup_data_dir, trl};
use trainlog::store::RecordStore;

#[test]
fn test_init_creates_storage() {
    let data_dir = setup_data_dir("cli_init");

    trl()
        .args(["--data-dir", &data_dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let base = Path::new(&data_dir);
    assert!(base.join("training_log.csv").exists());
    assert!(base.join("Backups").is_dir());
    assert!(base.join("Reports").is_dir());
    assert!(base.join("settings.json").exists());

    // running it twice is harmless
    trl()
        .args(["--data-dir", &data_dir, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_list_sessions_all() {
    let data_dir = setup_data_dir("cli_list_all");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("2 sessions"));
}

#[test]
fn test_list_filters_by_period_and_sport() {
    let data_dir = setup_data_dir("cli_list_filters");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "list", "--period", "2025-09-10:2025-09-30"])
        .assert()
        .success()
        .stdout(contains("2025-09-15").and(contains("2025-09-01").not()));

    trl()
        .args(["--data-dir", &data_dir, "list", "-p", "2025", "--sport", "running"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").and(contains("2025-09-15").not()));
}

#[test]
fn test_list_invalid_period_fails() {
    let data_dir = setup_data_dir("cli_list_bad_period");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "list", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_add_rejects_invalid_distance() {
    let data_dir = setup_data_dir("cli_add_bad_distance");
    trl()
        .args(["--data-dir", &data_dir, "--test", "init"])
        .assert()
        .success();

    trl()
        .args([
            "--data-dir",
            &data_dir,
            "add",
            "2025-10-01",
            "Running",
            "30",
            "--distance",
            "five",
        ])
        .assert()
        .failure()
        .stderr(contains("distance"));

    let store = RecordStore::new(&data_dir);
    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_add_rejects_unknown_sport_and_zero_duration() {
    let data_dir = setup_data_dir("cli_add_bad_sport");
    trl()
        .args(["--data-dir", &data_dir, "--test", "init"])
        .assert()
        .success();

    trl()
        .args(["--data-dir", &data_dir, "add", "2025-10-01", "Yoga", "30"])
        .assert()
        .failure()
        .stderr(contains("Invalid sport"));

    trl()
        .args(["--data-dir", &data_dir, "add", "2025-10-01", "Gym", "0"])
        .assert()
        .failure()
        .stderr(contains("duration"));
}

#[test]
fn test_add_keeps_note_verbatim() {
    let data_dir = setup_data_dir("cli_add_note");
    init_with_data(&data_dir);

    let store = RecordStore::new(&data_dir);
    let entries = store.load_all().expect("load");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].distance_km, Some(6.5));
    assert_eq!(entries[0].rpe, Some(7));
    assert_eq!(entries[1].note, "legs, then \"core\"");
}

#[test]
fn test_edit_session() {
    let data_dir = setup_data_dir("cli_edit");
    init_with_data(&data_dir);

    let store = RecordStore::new(&data_dir);
    let gym = store
        .load_all()
        .expect("load")
        .into_iter()
        .find(|e| e.date_str() == "2025-09-15")
        .expect("gym session");

    trl()
        .args([
            "--data-dir",
            &data_dir,
            "edit",
            gym.short_id(),
            "--duration",
            "60",
            "--rpe",
            "6",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    let edited = store.find(&gym.id).expect("still there");
    assert_eq!(edited.duration_minutes, 60);
    assert_eq!(edited.rpe, Some(6));
    assert_eq!(edited.note, gym.note);
}

#[test]
fn test_del_session_creates_backup() {
    let data_dir = setup_data_dir("cli_del");
    init_with_data(&data_dir);

    let store = RecordStore::new(&data_dir);
    let first = store.load_all().expect("load").remove(0);

    trl()
        .args(["--data-dir", &data_dir, "del", &first.id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let remaining = store.load_all().expect("load");
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0].id, first.id);
    assert_eq!(store.list_backups().expect("backups").len(), 1);
}

#[test]
fn test_del_unknown_id_fails() {
    let data_dir = setup_data_dir("cli_del_unknown");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "del", "nope", "-y"])
        .assert()
        .failure()
        .stderr(contains("No entry found"));
}

#[test]
fn test_stats_daily_load() {
    let data_dir = setup_data_dir("cli_stats_daily");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "add", "2025-09-01", "Gym", "45", "--rpe", "0"])
        .assert()
        .success();

    // 30*7 + 45*5
    trl()
        .args(["--data-dir", &data_dir, "stats", "daily", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("435"));
}

#[test]
fn test_stats_week_uses_default_rpe_setting() {
    let data_dir = setup_data_dir("cli_stats_week");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "settings", "--default-rpe", "4"])
        .assert()
        .success();

    // 2025-09-21 is a Sunday: week of Monday 2025-09-15, gym 45 min unrated
    trl()
        .args(["--data-dir", &data_dir, "stats", "week", "--date", "2025-09-21"])
        .assert()
        .success()
        .stdout(contains("Week 2025-09-15 - 2025-09-21"))
        .stdout(contains("Load:"))
        .stdout(contains("180"))
        .stdout(contains("legs, then \"core\""));
}

#[test]
fn test_stats_records_and_rollup() {
    let data_dir = setup_data_dir("cli_stats_records");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "stats", "records"])
        .assert()
        .success()
        .stdout(contains("Longest session"))
        .stdout(contains("Longest run"))
        .stdout(contains("6.5 km"));

    trl()
        .args([
            "--data-dir",
            &data_dir,
            "stats",
            "rollup",
            "--weeks",
            "3",
            "--date",
            "2025-09-15",
        ])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-08"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("(0 sessions)"));
}

#[test]
fn test_stats_rollup_rejects_out_of_range_weeks() {
    let data_dir = setup_data_dir("cli_stats_rollup_bounds");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "stats", "rollup", "--weeks", "100000000"])
        .assert()
        .failure();

    trl()
        .args(["--data-dir", &data_dir, "stats", "rollup", "--weeks", "0"])
        .assert()
        .failure();
}

#[test]
fn test_settings_print_and_update() {
    let data_dir = setup_data_dir("cli_settings");
    trl()
        .args(["--data-dir", &data_dir, "--test", "init"])
        .assert()
        .success();

    trl()
        .args(["--data-dir", &data_dir, "settings", "--dark-mode", "true"])
        .assert()
        .success()
        .stdout(contains("Settings saved"));

    trl()
        .args(["--data-dir", &data_dir, "settings", "--print"])
        .assert()
        .success()
        .stdout(contains("\"DarkMode\": true"))
        .stdout(contains("\"DefaultRPEForLoad\": 5"));

    trl()
        .args(["--data-dir", &data_dir, "settings", "--default-rpe", "11"])
        .assert()
        .failure();
}

#[test]
fn test_broken_settings_do_not_block_commands() {
    let data_dir = setup_data_dir("cli_settings_broken");
    init_with_data(&data_dir);

    fs::write(Path::new(&data_dir).join("settings.json"), "garbage").expect("write");

    trl()
        .args(["--data-dir", &data_dir, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2 sessions"));
}

#[test]
fn test_activity_log_records_operations() {
    let data_dir = setup_data_dir("cli_activity_log");
    init_with_data(&data_dir);

    trl()
        .args(["--data-dir", &data_dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}
