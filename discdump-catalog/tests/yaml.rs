use discdump_catalog::{CatalogError, load_catalog, load_systems};
use discdump_core::{DumpStatus, ModelError, TrackType};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

const PS1: &str = r#"
id: ps1
name: "Sony PlayStation"
short_name: PS1
description: Fifth-generation home video game console
"#;

const FF7: &str = r#"
id: ff7-disc1
title: "Final Fantasy VII"
region: U
system: ps1
languages: [English]
disc_number: 1
label: Greatest Hits
status: 2
edc: true
ring_codes:
  - type: mastering
    value: "SCUS-94163 1"
tracks:
  - number: 2
    type: 0
    size: 1058400
    pregap: 150
    offset: 333000
  - number: 1
    type: 3
    size: 681984000
    sectors: 333333
    crc32: A1B2C3D4
    md5: 123456789abcdef0123456789abcdef0
    sha1: 123456789abcdef0123456789abcdef012345678
"#;

#[test]
fn load_system_from_yaml() {
    let tmp = TempDir::new().unwrap();
    let systems_dir = tmp.path().join("systems");
    write_yaml(&systems_dir, "ps1.yaml", PS1);

    let systems = load_systems(&systems_dir).unwrap();
    assert_eq!(systems.len(), 1);
    assert_eq!(systems[0].short_name, "PS1");
    assert!(systems[0].description.is_some());
}

#[test]
fn load_catalog_resolves_systems() {
    let tmp = TempDir::new().unwrap();
    write_yaml(&tmp.path().join("systems"), "ps1.yaml", PS1);
    write_yaml(&tmp.path().join("dumps"), "ff7.yaml", FF7);

    let catalog = load_catalog(tmp.path()).unwrap();
    let dump = catalog.find("ff7-disc1").unwrap();

    assert_eq!(dump.system.as_ref().unwrap().name, "Sony PlayStation");
    assert_eq!(dump.status, DumpStatus::Verified);
    assert_eq!(dump.disc_number, Some(1));
    assert_eq!(dump.label.as_deref(), Some("Greatest Hits"));
    assert!(dump.edc);
    assert_eq!(dump.ring_codes().len(), 1);
    assert_eq!(dump.tracks().len(), 2);
    assert_eq!(dump.first_track().unwrap().track_type, TrackType::Mode2Form1);
    assert_eq!(dump.total_size(), 681984000 + 1058400);

    assert_eq!(catalog.dumps_for_system("ps1").count(), 1);
    assert_eq!(catalog.dumps_for_system("dc").count(), 0);
    assert!(catalog.system("ps1").is_some());
}

#[test]
fn unknown_system_leaves_dump_unattached() {
    let tmp = TempDir::new().unwrap();
    write_yaml(&tmp.path().join("dumps"), "ff7.yaml", FF7);

    let catalog = load_catalog(tmp.path()).unwrap();
    assert!(catalog.find("ff7-disc1").unwrap().system.is_none());
}

#[test]
fn unknown_track_type_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        &tmp.path().join("dumps"),
        "bad.yaml",
        "id: bad\ntitle: Bad\nregion: U\nsystem: ps1\ntracks:\n  - { number: 1, type: 15, size: 0 }\n",
    );

    let err = load_catalog(tmp.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }), "{err}");
    assert!(err.to_string().contains("Unknown track type code: 15"));
}

#[test]
fn duplicate_track_is_invalid_dump() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        &tmp.path().join("dumps"),
        "dup.yaml",
        r#"
id: dup
title: Dup
region: E
system: ps1
tracks:
  - { number: 1, type: 1, size: 0 }
  - { number: 1, type: 0, size: 0 }
"#,
    );

    match load_catalog(tmp.path()) {
        Err(CatalogError::InvalidDump { path, source }) => {
            assert!(path.ends_with("dup.yaml"));
            assert_eq!(source, ModelError::DuplicateTrack(1));
        }
        other => panic!("expected InvalidDump, got {other:?}"),
    }
}

#[test]
fn bad_checksum_is_invalid_dump() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        &tmp.path().join("dumps"),
        "crc.yaml",
        "id: crc\ntitle: Crc\nregion: J\nsystem: ps1\ntracks:\n  - { number: 1, type: 1, size: 0, crc32: xyz }\n",
    );

    assert!(matches!(
        load_catalog(tmp.path()),
        Err(CatalogError::InvalidDump {
            source: ModelError::InvalidChecksum { track: 1, .. },
            ..
        })
    ));
}

#[test]
fn missing_catalog_dir_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    assert!(matches!(
        load_catalog(&missing),
        Err(CatalogError::DirNotFound(_))
    ));
}

#[test]
fn empty_catalog_dir_loads_nothing() {
    let tmp = TempDir::new().unwrap();
    let catalog = load_catalog(tmp.path()).unwrap();
    assert!(catalog.dumps.is_empty());
    assert!(catalog.systems.is_empty());
}

#[test]
fn non_yaml_files_are_ignored() {
    let tmp = TempDir::new().unwrap();
    write_yaml(&tmp.path().join("systems"), "ps1.yaml", PS1);
    write_yaml(&tmp.path().join("systems"), "README.txt", "not yaml: [");

    let catalog = load_catalog(tmp.path()).unwrap();
    assert_eq!(catalog.systems.len(), 1);
}

#[test]
fn bundled_sample_catalog_loads() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../catalog");
    let catalog = load_catalog(&dir).unwrap();
    assert_eq!(catalog.systems.len(), 3);
    assert_eq!(catalog.dumps.len(), 3);
    assert!(catalog.dumps.iter().all(|d| d.system.is_some()));

    let shenmue = catalog.find("shenmue-disc1").unwrap();
    assert_eq!(shenmue.tracks().len(), 3);
    assert_eq!(shenmue.first_track().unwrap().crc32.as_deref(), Some("c9d0e1f2"));
}
