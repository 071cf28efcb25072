use chrono::NaiveDate;

use super::*;
use discdump_core::{System, Track, TrackType};
use discdump_export::FixedClock;

fn catalog() -> Catalog {
    let ps1 = System {
        id: "ps1".to_string(),
        name: "Sony PlayStation".to_string(),
        short_name: "PS1".to_string(),
        description: None,
    };
    let ff7 = Dump::new("ff7-disc1", "Final Fantasy VII", "U")
        .with_system(ps1.clone())
        .with_disc_number(1)
        .with_tracks(vec![Track::new(1, TrackType::Mode2Form1, 681_984_000)])
        .unwrap();
    let orphan = Dump::new("orphan", "Orphan", "J")
        .with_tracks(vec![Track::new(1, TrackType::Mode1, 10)])
        .unwrap();
    Catalog {
        systems: vec![ps1],
        dumps: vec![ff7, orphan],
    }
}

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
}

#[test]
fn export_writes_both_files_under_system_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    let written = run_export(
        &catalog(),
        "ff7-disc1",
        tmp.path(),
        &clock(),
        &DatOptions::default(),
    )
    .unwrap();

    let dir = tmp.path().join("PS1");
    assert_eq!(
        written,
        vec![
            dir.join("Final Fantasy VII - U - Disc 1.cue"),
            dir.join("Final Fantasy VII - U - Disc 1.dat"),
        ]
    );
    let dat = std::fs::read_to_string(&written[1]).unwrap();
    assert!(dat.contains("<version>2024-03-01</version>"));
}

#[test]
fn export_without_system_writes_nothing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let result = run_export(&catalog(), "orphan", tmp.path(), &clock(), &DatOptions::default());
    match result {
        Err(CliError::Export(msg)) => assert!(msg.contains("'orphan' has no system attached"), "{msg}"),
        other => panic!("expected Export error, got {other:?}"),
    }
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn cue_for_orphan_still_works() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = run_cue(&catalog(), "orphan", Some(tmp.path()))
        .unwrap()
        .unwrap();
    assert_eq!(path, tmp.path().join("Orphan - J.cue"));
}

#[test]
fn unknown_id_is_not_found() {
    assert!(matches!(
        run_cue(&catalog(), "nope", None),
        Err(CliError::NotFound(_))
    ));
    assert!(matches!(
        run_dat(&catalog(), "nope", None, &clock(), &DatOptions::default()),
        Err(CliError::NotFound(_))
    ));
}
