use std::path::PathBuf;

use serde::Serialize;

use discdump_core::{Dump, Track, TrackType};
use discdump_export::hash_track_file;

use crate::error::CliError;

#[derive(Serialize)]
struct TrackList {
    tracks: Vec<Track>,
}

/// Hash each file as consecutive tracks starting at 1 and render the result
/// as a `tracks:` YAML block ready to paste into a dump record.
pub(crate) fn hash_tracks(files: &[PathBuf], track_type: u8) -> Result<String, CliError> {
    let track_type = TrackType::from_code(track_type)
        .map_err(|e| CliError::invalid_argument(e.to_string()))?;

    let mut tracks = Vec::with_capacity(files.len());
    for (index, path) in files.iter().enumerate() {
        let number = index as u32 + 1;
        let hashes = hash_track_file(path)?;
        log::info!(
            "Track {:02}: {} ({} bytes)",
            number,
            path.display(),
            hashes.size
        );
        tracks.push(hashes.into_track(number, track_type));
    }
    Dump::validate_tracks(&tracks).map_err(|e| CliError::invalid_argument(e.to_string()))?;

    serde_yml::to_string(&TrackList { tracks })
        .map_err(|e| CliError::invalid_argument(e.to_string()))
}

pub(crate) fn run_hash(files: &[PathBuf], track_type: u8) -> Result<(), CliError> {
    let yaml = hash_tracks(files, track_type)?;
    print!("{yaml}");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/hash_tests.rs"]
mod tests;
