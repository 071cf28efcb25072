use super::*;
use discdump_core::{ModelError, Track, TrackType};

fn ff7() -> Dump {
    Dump::new("ff7-d1", "Final Fantasy VII", "U")
        .with_tracks(vec![
            Track::new(2, TrackType::Audio, 1058400)
                .with_pregap(150)
                .with_offset(333000),
            Track::new(1, TrackType::Mode2Form1, 681984000),
        ])
        .unwrap()
}

#[test]
fn full_sheet() {
    let cue = generate_cue(&ff7()).unwrap();
    assert_eq!(
        cue,
        "TITLE \"Final Fantasy VII\"\n\
         \n\
         TRACK 01 Mode 2 Form 1\n\
         \x20 INDEX 01 00:00:00\n\
         \n\
         TRACK 02 Audio\n\
         \x20 PREGAP 00:02:00\n\
         \x20 INDEX 01 74:00:00\n"
    );
}

#[test]
fn tracks_sorted_regardless_of_input_order() {
    let cue = generate_cue(&ff7()).unwrap();
    let first = cue.find("TRACK 01").unwrap();
    let second = cue.find("TRACK 02").unwrap();
    assert!(first < second);
}

#[test]
fn zero_pregap_is_omitted() {
    let dump = Dump::new("a", "A", "J")
        .with_tracks(vec![Track::new(1, TrackType::Mode1, 0).with_pregap(0)])
        .unwrap();
    let cue = generate_cue(&dump).unwrap();
    assert!(!cue.contains("PREGAP"));
    assert!(cue.contains("  INDEX 01 00:00:00\n"));
}

#[test]
fn title_line_comes_first() {
    let cue = generate_cue(&Dump::new("a", "Ridge Racer", "J")).unwrap();
    assert_eq!(cue, "TITLE \"Ridge Racer\"\n");
}

#[test]
fn embedded_quotes_are_replaced() {
    let cue = generate_cue(&Dump::new("a", "The \"Best\" Game", "E")).unwrap();
    assert_eq!(cue, "TITLE \"The 'Best' Game\"\n");
}

#[test]
fn two_digit_track_numbers() {
    let tracks = (1..=12)
        .map(|n| Track::new(n, TrackType::Audio, 0))
        .collect();
    let dump = Dump::new("a", "A", "U").with_tracks(tracks).unwrap();
    let cue = generate_cue(&dump).unwrap();
    assert!(cue.contains("TRACK 09 Audio\n"));
    assert!(cue.contains("TRACK 12 Audio\n"));
}

#[test]
fn idempotent() {
    let dump = ff7();
    assert_eq!(generate_cue(&dump).unwrap(), generate_cue(&dump).unwrap());
}

#[test]
fn invalid_numbering_is_reported() {
    // Deserialization bypasses set_tracks, so the generator re-checks.
    let yaml = r#"
id: bad
title: Bad
region: U
tracks:
  - { number: 2, type: 0, size: 0 }
"#;
    let dump: Dump = serde_yml::from_str(yaml).unwrap();
    assert!(matches!(
        generate_cue(&dump),
        Err(ExportError::Model(ModelError::MissingFirstTrack { lowest: 2 }))
    ));
}
