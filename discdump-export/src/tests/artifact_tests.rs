use chrono::NaiveDate;

use super::*;
use crate::clock::FixedClock;
use discdump_core::{System, Track, TrackType};

fn dump() -> Dump {
    Dump::new("sotn", "Castlevania: Symphony of the Night", "U")
        .with_system(System {
            id: "ps1".to_string(),
            name: "Sony PlayStation".to_string(),
            short_name: "PS1".to_string(),
            description: None,
        })
        .with_tracks(vec![
            Track::new(1, TrackType::Mode2Form1, 556_514_400),
            Track::new(2, TrackType::Audio, 48_127_920).with_pregap(150),
        ])
        .unwrap()
}

#[test]
fn cue_artifact_headers() {
    let artifact = cue_artifact(&dump()).unwrap();
    assert_eq!(artifact.kind, ArtifactKind::Cue);
    assert_eq!(artifact.content_type(), "text/plain");
    assert_eq!(
        artifact.filename,
        "Castlevania Symphony of the Night - U.cue"
    );
    assert_eq!(
        artifact.content_disposition(),
        "attachment; filename=\"Castlevania Symphony of the Night - U.cue\""
    );
    assert!(artifact.body.starts_with("TITLE \"Castlevania: Symphony of the Night\"\n"));
}

#[test]
fn dat_artifact_headers() {
    let clock = FixedClock(NaiveDate::from_ymd_opt(2023, 12, 28).unwrap());
    let artifact = dat_artifact(&dump(), &clock, &DatOptions::default()).unwrap();
    assert_eq!(artifact.content_type(), "application/xml");
    assert_eq!(artifact.filename, "Castlevania Symphony of the Night - U.dat");
    assert!(artifact.body.contains("<version>2023-12-28</version>"));
}

#[test]
fn dat_artifact_propagates_missing_system() {
    let mut dump = dump();
    dump.system = None;
    let clock = FixedClock(NaiveDate::from_ymd_opt(2023, 12, 28).unwrap());
    assert!(matches!(
        dat_artifact(&dump, &clock, &DatOptions::default()),
        Err(ExportError::MissingSystem { .. })
    ));
}

#[test]
fn write_to_dir_creates_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = tmp.path().join("exports").join("PS1");
    let artifact = cue_artifact(&dump()).unwrap();

    let path = artifact.write_to_dir(&out).unwrap();
    assert_eq!(path, out.join("Castlevania Symphony of the Night - U.cue"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), artifact.body);

    let leftovers: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn failed_rename_removes_temp_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let artifact = cue_artifact(&dump()).unwrap();
    // A directory in the way makes the final rename fail.
    std::fs::create_dir_all(tmp.path().join(&artifact.filename).join("blocker")).unwrap();

    let err = artifact.write_to_dir(tmp.path()).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)), "{err}");
    assert!(!tmp.path().join(format!("{}.tmp", artifact.filename)).exists());
}
