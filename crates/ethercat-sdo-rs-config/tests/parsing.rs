// crates/ethercat-sdo-rs-config/tests/parsing.rs

use ethercat_sdo_rs::{
    DataType, LoadError, LoggingDiagnostics, OnInvalidEntry, SdoConfigEntry, encode_all,
    total_data_size,
};
use ethercat_sdo_rs_config::{
    load_sdo_list_from_file, load_sdo_list_from_json_str, load_sdo_list_from_toml_str,
    load_sdo_list_from_xml_str, load_sdo_list_from_yaml_str,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to build the path of a file in the `tests/data/` directory.
fn test_file_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);
    path
}

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let path = test_file_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn init_logging() {
    let _ = env_logger::Builder::new()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

fn expected_entries() -> Vec<SdoConfigEntry> {
    vec![
        SdoConfigEntry::new(0x1c12, 0, DataType::Uint8, 0),
        SdoConfigEntry::new(0x1c12, 1, DataType::Uint16, 0x1600),
        SdoConfigEntry::new(0x1c12, 0, DataType::Uint8, 1),
        SdoConfigEntry::new(0x6060, 0, DataType::Int8, 8),
        SdoConfigEntry::new(0x8010, 1, DataType::Uint32, 2500),
        SdoConfigEntry::new(0x607a, 0, DataType::Int32, -200_000),
    ]
}

/// All four formats describe the same startup sequence and must load to
/// identical entries, in document order.
#[test]
fn test_formats_agree() {
    init_logging();
    let mut diagnostics = LoggingDiagnostics::for_slave(1);

    let json = load_sdo_list_from_json_str(
        &load_test_file("el7211_startup.json"),
        OnInvalidEntry::Abort,
        &mut diagnostics,
    )
    .expect("Failed to parse JSON startup list");
    let toml = load_sdo_list_from_toml_str(
        &load_test_file("el7211_startup.toml"),
        OnInvalidEntry::Abort,
        &mut diagnostics,
    )
    .expect("Failed to parse TOML startup list");
    let yaml = load_sdo_list_from_yaml_str(
        &load_test_file("el7211_startup.yaml"),
        OnInvalidEntry::Abort,
        &mut diagnostics,
    )
    .expect("Failed to parse YAML startup list");
    let xml = load_sdo_list_from_xml_str(
        &load_test_file("el7211_startup.xml"),
        OnInvalidEntry::Abort,
        &mut diagnostics,
    )
    .expect("Failed to parse XML startup list");

    assert_eq!(json, expected_entries());
    assert_eq!(toml, expected_entries());
    assert_eq!(yaml, expected_entries());
    assert_eq!(xml, expected_entries());
}

/// Loading by path picks the format from the extension.
#[test]
fn test_load_from_file() {
    init_logging();
    for name in [
        "el7211_startup.json",
        "el7211_startup.toml",
        "el7211_startup.yaml",
        "el7211_startup.xml",
    ] {
        let mut reports: Vec<LoadError> = Vec::new();
        let entries =
            load_sdo_list_from_file(&test_file_path(name), OnInvalidEntry::Abort, &mut reports)
                .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        assert_eq!(entries, expected_entries(), "{}", name);
        assert!(reports.is_empty());
    }
}

/// The loaded list lays out into one transmission buffer, little-endian,
/// each value at its own width.
#[test]
fn test_startup_list_encoding() {
    let entries = load_sdo_list_from_file(
        &test_file_path("el7211_startup.json"),
        OnInvalidEntry::Abort,
        &mut ethercat_sdo_rs::NoOpDiagnostics,
    )
    .unwrap();

    assert_eq!(total_data_size(&entries), 13);
    let mut frame = vec![0u8; 13];
    assert_eq!(encode_all(&entries, &mut frame), Ok(13));
    assert_eq!(
        frame,
        vec![
            0x00, // 0x1c12/0 uint8
            0x00, 0x16, // 0x1c12/1 uint16
            0x01, // 0x1c12/0 uint8
            0x08, // 0x6060/0 int8
            0xC4, 0x09, 0x00, 0x00, // 0x8010/1 uint32
            0xC0, 0xF2, 0xFC, 0xFF, // 0x607a/0 int32
        ]
    );
}
