mod common;

use std::fs;

use common::TempDir;
use wallframe_core::{MonitorRecord, TopologyConfig, TopologyError, TopologyStore};

fn sample() -> TopologyConfig {
    TopologyConfig {
        url: "http://localhost:3100/#/columns-fullscreen".to_string(),
        monitors: vec![
            MonitorRecord {
                name: r"\\.\DISPLAY1".to_string(),
                is_primary: true,
                active: false,
                position_x: 0,
                position_y: 0,
                width: 2560,
                height: 1440,
            },
            MonitorRecord {
                name: r"\\.\DISPLAY2".to_string(),
                is_primary: false,
                active: true,
                position_x: -1920,
                position_y: 0,
                width: 1920,
                height: 1080,
            },
        ],
    }
}

#[test]
fn save_load_save_is_byte_identical() {
    let temp = TempDir::new("roundtrip");
    let store = TopologyStore::new(temp.path.join("config.json"));

    store.save(&sample()).unwrap();
    let first = fs::read(store.path()).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, sample());

    store.save(&loaded).unwrap();
    assert_eq!(fs::read(store.path()).unwrap(), first);
}

#[test]
fn saved_file_uses_wire_field_names() {
    let temp = TempDir::new("wire");
    let store = TopologyStore::new(temp.path.join("config.json"));
    store.save(&sample()).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    for field in [
        "\"URL\"",
        "\"Monitors\"",
        "\"Name\"",
        "\"IsPrimary\"",
        "\"Active\"",
        "\"PositionX\"",
        "\"PositionY\"",
        "\"Width\"",
        "\"Height\"",
    ] {
        assert!(raw.contains(field), "missing {field} in {raw}");
    }
    // Indented for hand editing
    assert!(raw.contains("\n  "));
}

#[test]
fn missing_fields_take_defaults_and_unknown_fields_are_ignored() {
    let temp = TempDir::new("lenient");
    let store = TopologyStore::new(temp.path.join("config.json"));
    fs::write(
        store.path(),
        r#"{
  "Monitors": [
    { "Name": "\\\\.\\DISPLAY3", "Active": true, "RefreshRate": 144 }
  ],
  "Theme": "dark"
}"#,
    )
    .unwrap();

    let topology = store.load().unwrap();
    assert_eq!(topology.url, "");
    assert_eq!(topology.monitors.len(), 1);
    let monitor = &topology.monitors[0];
    assert_eq!(monitor.name, r"\\.\DISPLAY3");
    assert!(monitor.active);
    assert!(!monitor.is_primary);
    assert_eq!((monitor.width, monitor.height), (0, 0));
}

#[test]
fn type_mismatch_is_malformed() {
    let temp = TempDir::new("mismatch");
    let store = TopologyStore::new(temp.path.join("config.json"));
    fs::write(store.path(), r#"{"Monitors": [{"Width": "wide"}]}"#).unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, TopologyError::ConfigMalformed { .. }));
    assert!(err.is_fatal());
}

#[test]
fn truncated_file_is_malformed() {
    let temp = TempDir::new("truncated");
    let store = TopologyStore::new(temp.path.join("config.json"));
    fs::write(store.path(), r#"{"URL": "http://x", "Monitors": ["#).unwrap();

    assert!(matches!(
        store.load(),
        Err(TopologyError::ConfigMalformed { .. })
    ));
}

#[test]
fn absent_file_is_not_found_and_exists_has_no_side_effects() {
    let temp = TempDir::new("absent");
    let store = TopologyStore::new(temp.path.join("nested").join("config.json"));

    assert!(!store.exists());
    assert!(!temp.path.join("nested").exists());
    assert!(matches!(
        store.load(),
        Err(TopologyError::ConfigNotFound { .. })
    ));
}

#[test]
fn save_creates_parent_and_leaves_no_scratch_file() {
    let temp = TempDir::new("atomic");
    let store = TopologyStore::new(temp.path.join("nested").join("config.json"));

    store.save(&sample()).unwrap();
    store.save(&TopologyConfig::default()).unwrap();

    let names: Vec<_> = fs::read_dir(temp.path.join("nested"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["config.json".to_string()]);
    assert_eq!(store.load().unwrap(), TopologyConfig::default());
}

#[test]
fn directory_in_place_of_file_is_not_treated_as_present() {
    let temp = TempDir::new("dir");
    let store = TopologyStore::new(temp.path.join("config.json"));
    fs::create_dir_all(store.path()).unwrap();

    assert!(!store.exists());
    assert!(matches!(store.load(), Err(TopologyError::ConfigIo { .. })));
}
