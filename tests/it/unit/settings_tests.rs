//! Settings persistence tests.

use polysketch::settings::{Settings, SettingsError};
use polysketch::PointerButton;

#[test]
fn default_bindings_and_display() {
    let settings = Settings::default();
    assert_eq!(settings.bindings.place, PointerButton::Left);
    assert_eq!(settings.bindings.close, PointerButton::Right);
    assert_eq!(settings.display.area_decimals, 2);
    assert_eq!(settings.display.line_width, 2.0);
    assert_eq!(settings.display.marker_radius, 4.0);
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.bindings.close = PointerButton::Middle;
    settings.display.area_decimals = 5;

    settings.save_to(&path).expect("save");
    let loaded = Settings::load_from(&path).expect("load");
    assert_eq!(loaded, settings);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = Settings::load_from(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn load_malformed_json_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").expect("write");

    let result = Settings::load_from(&path);
    assert!(matches!(result, Err(SettingsError::Json(_))));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "display": { "area_decimals": 4 } }"#).expect("write");

    let loaded = Settings::load_from(&path).expect("load");
    assert_eq!(loaded.display.area_decimals, 4);
    assert_eq!(loaded.display.line_width, 2.0);
    assert_eq!(loaded.bindings.place, PointerButton::Left);
}
