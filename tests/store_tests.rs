mod common;
use common::{date, entry, setup_data_dir};
use std::fs;
use trainlog::core::add::AddLogic;
use trainlog::core::del::DeleteLogic;
use trainlog::core::edit::{EditLogic, EntryPatch};
use trainlog::core::parse::{NewEntry, parse_row};
use trainlog::errors::AppError;
use trainlog::models::Sport;
use trainlog::store::RecordStore;
use trainlog::store::row::{HEADER, to_line};
use trainlog::utils::date::today;

fn store_for(name: &str) -> RecordStore {
    let dir = setup_data_dir(name);
    let store = RecordStore::new(&dir);
    store.ensure_storage().expect("ensure storage");
    store
}

fn new_entry(day: &str, sport: &str, duration: &str) -> NewEntry {
    NewEntry {
        date: day.to_string(),
        sport: sport.to_string(),
        duration: duration.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_ensure_storage_is_idempotent() {
    let store = store_for("store_ensure_idempotent");

    assert!(store.log_path.exists());
    assert!(store.backup_dir().is_dir());
    assert!(store.report_dir().is_dir());

    let first = fs::read_to_string(&store.log_path).expect("read log");
    assert_eq!(
        first,
        "Id,Date,Sport,DurationMin,Calories,DistanceKm,RPE,AvgHR,Note\n"
    );

    store.ensure_storage().expect("second call");
    let second = fs::read_to_string(&store.log_path).expect("read log");
    assert_eq!(first, second);
}

#[test]
fn test_missing_log_loads_as_empty() {
    let dir = setup_data_dir("store_missing_log");
    let store = RecordStore::new(&dir);
    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_note_round_trip_with_comma_and_quote() {
    let store = store_for("store_note_round_trip");

    let mut e = entry("n1", "2024-05-01", Sport::Running, 30, Some(6));
    e.note = "felt \"great\", then cramped".to_string();
    e.distance_km = Some(5.25);
    e.calories = Some(320);
    e.avg_heart_rate = Some(151);
    store.append(&e).expect("append");

    let line = to_line(&e).expect("serialize");
    assert!(line.ends_with("\"felt \"\"great\"\", then cramped\""));

    let loaded = store.load_all().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], e);
    assert_eq!(loaded[0].note.as_bytes(), e.note.as_bytes());
}

#[test]
fn test_log_file_quotes_only_the_note() {
    let store = store_for("store_row_format");

    let mut bare = entry("x1", "2024-01-01", Sport::Gym, 30, None);
    bare.note = "a, \"b\"".to_string();
    store.append(&bare).expect("append bare");

    let mut full = entry("x2", "2024-01-02", Sport::Running, 45, Some(7));
    full.calories = Some(410);
    full.distance_km = Some(8.25);
    full.avg_heart_rate = Some(148);
    store.append(&full).expect("append full");

    let content = fs::read_to_string(&store.log_path).expect("read log");
    assert_eq!(
        content,
        "Id,Date,Sport,DurationMin,Calories,DistanceKm,RPE,AvgHR,Note\n\
         x1,2024-01-01,Gym,30,,,,,\"a, \"\"b\"\"\"\n\
         x2,2024-01-02,Running,45,410,8.25,7,148,\"\"\n"
    );
}

#[test]
fn test_free_sport_label_with_comma_round_trips() {
    let store = store_for("store_sport_with_comma");

    let odd = entry("s1", "2024-01-01", Sport::Unknown("Run, Swim".to_string()), 60, None);
    store.append(&odd).expect("append");

    assert_eq!(
        to_line(&odd).expect("serialize"),
        "s1,2024-01-01,\"Run, Swim\",60,,,,,\"\""
    );
    assert_eq!(store.load_all().expect("load"), vec![odd]);
}

#[test]
fn test_log_without_header_keeps_first_row() {
    let store = store_for("store_missing_header");
    fs::write(
        &store.log_path,
        "h1,2024-01-01,Gym,30,,,,,\"\"\nh2,2024-01-02,Running,20,,5,,,\"easy\"\n",
    )
    .expect("write");

    let ids: Vec<String> = store.load_all().expect("load").into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["h1", "h2"]);
}

#[test]
fn test_append_never_rewrites_existing_rows() {
    let store = store_for("store_append_only");

    store
        .append(&entry("a", "2024-05-02", Sport::Gym, 40, None))
        .expect("append a");
    let before = fs::read_to_string(&store.log_path).expect("read");

    store
        .append(&entry("b", "2024-05-01", Sport::Gym, 50, None))
        .expect("append b");
    let after = fs::read_to_string(&store.log_path).expect("read");

    assert!(after.starts_with(&before));
    assert_eq!(after.lines().count(), before.lines().count() + 1);

    // loaded sorted by date, not file order
    let ids: Vec<String> = store.load_all().expect("load").into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn test_append_repairs_missing_trailing_newline() {
    let store = store_for("store_missing_newline");
    let header = HEADER.join(",");
    fs::write(&store.log_path, format!("{header}\nx1,2024-01-01,Gym,30,,,,,")).expect("write");

    store
        .append(&entry("x2", "2024-01-02", Sport::Gym, 20, None))
        .expect("append");

    let loaded = store.load_all().expect("load");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].id, "x2");
}

#[test]
fn test_lenient_load_coerces_bad_rows() {
    let store = store_for("store_lenient_rows");
    let content = [
        HEADER.join(","),
        "r1,not-a-date,Yoga,abc,12.5,\"5,5\",0,-3,".to_string(),
        "r2,2024-03-04,Running,30".to_string(),
        ",2024-03-05,Gym,20,,,11,,hello".to_string(),
        ",,,,,,,,".to_string(),
    ]
    .join("\n");
    fs::write(&store.log_path, content).expect("write");

    let loaded = store.load_all().expect("lenient load never fails");
    assert_eq!(loaded.len(), 3);

    let r1 = loaded.iter().find(|e| e.id == "r1").expect("r1 kept");
    assert_eq!(r1.date, today());
    assert_eq!(r1.sport, Sport::Unknown("Yoga".to_string()));
    assert_eq!(r1.duration_minutes, 0);
    assert_eq!(r1.calories, None);
    assert_eq!(r1.distance_km, Some(5.5));
    assert_eq!(r1.rpe, None);
    assert_eq!(r1.avg_heart_rate, None);

    let r2 = loaded.iter().find(|e| e.id == "r2").expect("r2 kept");
    assert_eq!(r2.sport, Sport::Running);
    assert_eq!(r2.duration_minutes, 30);
    assert_eq!(r2.calories, None);
    assert_eq!(r2.note, "");

    let generated = loaded
        .iter()
        .find(|e| e.note == "hello")
        .expect("row without id kept");
    assert!(!generated.id.is_empty());
    assert_eq!(generated.rpe, None);
}

#[test]
fn test_parse_row_keeps_unknown_sport_label() {
    let e = parse_row(&["id", "2024-01-01", "Padel", "60", "", "", "7", "", "n"]);
    assert_eq!(e.sport.as_str(), "Padel");
    assert_eq!(e.rpe, Some(7));
    assert_eq!(e.date, date("2024-01-01"));
}

#[test]
fn test_strict_validation_names_field_and_persists_nothing() {
    let store = store_for("store_strict_validation");

    let mut bad_distance = new_entry("2024-01-01", "Running", "30");
    bad_distance.distance = Some("5.2.1".to_string());
    match AddLogic::apply(&store, &bad_distance) {
        Err(AppError::InvalidInput { field, .. }) => assert_eq!(field, "distance"),
        other => panic!("expected distance error, got {other:?}"),
    }

    let zero_duration = new_entry("2024-01-01", "Running", "0");
    match AddLogic::apply(&store, &zero_duration) {
        Err(AppError::InvalidInput { field, .. }) => assert_eq!(field, "duration"),
        other => panic!("expected duration error, got {other:?}"),
    }

    let bad_sport = new_entry("2024-01-01", "Yoga", "30");
    assert!(matches!(
        AddLogic::apply(&store, &bad_sport),
        Err(AppError::InvalidSport(_))
    ));

    let bad_date = new_entry("2024-02-30", "Gym", "30");
    assert!(matches!(
        AddLogic::apply(&store, &bad_date),
        Err(AppError::InvalidDate(_))
    ));

    let mut bad_rpe = new_entry("2024-01-01", "Gym", "30");
    bad_rpe.rpe = Some("11".to_string());
    assert!(AddLogic::apply(&store, &bad_rpe).is_err());

    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_strict_validation_accepts_valid_input() {
    let mut input = new_entry("2024-01-01", "bjj", "75");
    input.distance = Some(",5".to_string());
    input.rpe = Some("0".to_string());
    input.calories = Some(" 600 ".to_string());
    input.note = Some("open mat".to_string());

    let e = input.validate().expect("valid input");
    assert_eq!(e.sport, Sport::Bjj);
    assert_eq!(e.duration_minutes, 75);
    assert_eq!(e.distance_km, Some(0.5));
    assert_eq!(e.rpe, None);
    assert_eq!(e.calories, Some(600));
    assert_eq!(e.note, "open mat");
}

#[test]
fn test_delete_preserves_others_and_creates_newer_backup() {
    let store = store_for("store_delete_rewrite");

    let mut a = entry("a", "2024-01-01", Sport::Running, 30, Some(7));
    a.note = "first, \"easy\"".to_string();
    let b = entry("b", "2024-01-02", Sport::Gym, 45, None);
    let c = entry("c", "2024-01-02", Sport::Bjj, 60, Some(9));
    for e in [&a, &b, &c] {
        store.append(e).expect("append");
    }

    let earlier = store.backup().expect("manual backup");

    let removed = DeleteLogic::apply(&store, "b").expect("delete");
    assert_eq!(removed.id, "b");

    let remaining = store.load_all().expect("load");
    assert_eq!(remaining, vec![a, c]);

    let backups = store.list_backups().expect("list backups");
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0], earlier);
    assert!(backups[1] > earlier);

    // the backup holds the pre-delete content
    let saved = fs::read_to_string(&backups[1]).expect("read backup");
    assert!(saved.contains("\"b\""));
}

#[test]
fn test_delete_unknown_id_changes_nothing() {
    let store = store_for("store_delete_unknown");
    store
        .append(&entry("keep", "2024-01-01", Sport::Gym, 30, None))
        .expect("append");

    assert!(matches!(
        DeleteLogic::apply(&store, "missing"),
        Err(AppError::EntryNotFound(_))
    ));
    assert_eq!(store.load_all().expect("load").len(), 1);
    assert!(store.list_backups().expect("list").is_empty());
}

#[test]
fn test_resolve_id_by_prefix() {
    let store = store_for("store_resolve_prefix");
    store
        .append(&entry("abc123", "2024-01-01", Sport::Gym, 30, None))
        .expect("append");
    store
        .append(&entry("abd456", "2024-01-02", Sport::Gym, 30, None))
        .expect("append");

    assert_eq!(store.resolve_id("abc").expect("unique"), "abc123");
    assert!(matches!(store.resolve_id("ab"), Err(AppError::Other(_))));
    assert!(matches!(store.resolve_id("zz"), Err(AppError::EntryNotFound(_))));
}

#[test]
fn test_edit_revalidates_and_keeps_id() {
    let store = store_for("store_edit");
    let added = AddLogic::apply(&store, &new_entry("2024-04-01", "Running", "30")).expect("add");

    let patch = EntryPatch {
        duration: Some("50".to_string()),
        rpe: Some("8".to_string()),
        note: Some("tempo".to_string()),
        ..Default::default()
    };
    let updated = EditLogic::apply(&store, added.short_id(), &patch).expect("edit");
    assert_eq!(updated.id, added.id);
    assert_eq!(updated.duration_minutes, 50);
    assert_eq!(updated.rpe, Some(8));

    let bad = EntryPatch {
        distance: Some("far".to_string()),
        ..Default::default()
    };
    assert!(EditLogic::apply(&store, &added.id, &bad).is_err());

    let stored = store.find(&added.id).expect("find");
    assert_eq!(stored, updated);

    // clearing an optional field
    let clear = EntryPatch {
        rpe: Some(String::new()),
        ..Default::default()
    };
    let cleared = EditLogic::apply(&store, &added.id, &clear).expect("clear rpe");
    assert_eq!(cleared.rpe, None);
    assert_eq!(cleared.note, "tempo");
}
