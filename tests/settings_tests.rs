mod common;
use common::setup_data_dir;
use std::fs;
use std::path::PathBuf;
use trainlog::settings::Settings;

fn settings_path(name: &str) -> PathBuf {
    let dir = PathBuf::from(setup_data_dir(name));
    fs::create_dir_all(&dir).expect("create dir");
    dir.join("settings.json")
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = settings_path("settings_missing");
    let s = Settings::load(&path);
    assert!(!s.dark_mode);
    assert_eq!(s.default_rpe_for_load, 5);
}

#[test]
fn test_garbage_file_gives_defaults() {
    let path = settings_path("settings_garbage");
    fs::write(&path, "{ not json").expect("write");
    assert_eq!(Settings::load(&path), Settings::default());

    fs::write(&path, r#"{"DarkMode": "yes"}"#).expect("write");
    assert_eq!(Settings::load(&path), Settings::default());
}

#[test]
fn test_save_then_load_round_trip() {
    let path = settings_path("settings_round_trip");
    let s = Settings {
        dark_mode: true,
        default_rpe_for_load: 7,
    };
    s.save(&path).expect("save");

    let content = fs::read_to_string(&path).expect("read");
    assert!(content.contains("\"DarkMode\": true"));
    assert!(content.contains("\"DefaultRPEForLoad\": 7"));

    assert_eq!(Settings::load(&path), s);
}

#[test]
fn test_unknown_keys_ignored_and_rpe_clamped() {
    let path = settings_path("settings_unknown_keys");
    fs::write(
        &path,
        r#"{"DarkMode": true, "DefaultRPEForLoad": 42, "Theme": "solarized"}"#,
    )
    .expect("write");

    let s = Settings::load(&path);
    assert!(s.dark_mode);
    assert_eq!(s.default_rpe_for_load, 10);

    fs::write(&path, r#"{"DefaultRPEForLoad": 0}"#).expect("write");
    let s = Settings::load(&path);
    assert!(!s.dark_mode);
    assert_eq!(s.default_rpe(), 1);
}

#[test]
fn test_save_replaces_previous_content() {
    let path = settings_path("settings_replace");
    fs::write(&path, r#"{"DarkMode": true, "Legacy": 1}"#).expect("write");

    Settings::default().save(&path).expect("save");
    let content = fs::read_to_string(&path).expect("read");
    assert!(!content.contains("Legacy"));
    assert_eq!(Settings::load(&path), Settings::default());
}
