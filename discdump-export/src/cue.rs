use std::fmt::Write;

use discdump_core::Dump;

use crate::error::ExportError;
use crate::msf::format_sectors;

/// Generate a CUE sheet for a dump.
///
/// Tracks are emitted in ascending number order regardless of how they are
/// stored. A `PREGAP` line is written only for a non-zero pregap, and every
/// track gets `INDEX 01` at its offset (zero when unset).
///
/// ```text
/// TITLE "Final Fantasy VII"
///
/// TRACK 01 Mode 2 Form 1
///   INDEX 01 00:00:00
///
/// TRACK 02 Audio
///   PREGAP 00:02:00
///   INDEX 01 74:00:00
/// ```
pub fn generate_cue(dump: &Dump) -> Result<String, ExportError> {
    Dump::validate_tracks(dump.tracks())?;

    let mut cue = String::new();
    // String formatting is infallible
    let _ = writeln!(cue, "TITLE \"{}\"", cue_quote(&dump.title));

    for track in dump.sorted_tracks() {
        let _ = writeln!(cue);
        let _ = writeln!(cue, "TRACK {:02} {}", track.number, track.track_type.label());

        let pregap = track.pregap_sectors();
        if pregap > 0 {
            let _ = writeln!(cue, "  PREGAP {}", format_sectors(pregap));
        }

        let _ = writeln!(cue, "  INDEX 01 {}", format_sectors(track.offset_sectors()));
    }

    log::debug!(
        "Generated CUE sheet for '{}' ({} tracks)",
        dump.id,
        dump.tracks().len()
    );
    Ok(cue)
}

/// CUE strings have no escape syntax, so embedded double quotes become
/// single quotes to keep the line parseable.
fn cue_quote(text: &str) -> String {
    text.replace('"', "'")
}

#[cfg(test)]
#[path = "tests/cue_tests.rs"]
mod tests;
