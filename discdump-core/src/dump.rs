//! Dump records: one catalogued optical disc and everything it owns.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::region::Region;
use crate::status::DumpStatus;
use crate::track::Track;

/// A named platform (e.g. "Sony PlayStation", short name "PS1").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub id: String,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An identifier etched near the disc hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingCode {
    /// Which ring the code was read from ("mastering", "mould", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// A catalogued recording of one optical disc.
///
/// Tracks and ring codes are owned exclusively by the dump and are only
/// ever replaced as a whole; see [`Dump::set_tracks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dump {
    pub id: String,
    pub title: String,
    /// Region code as entered ("U", "USA", "NTSC-U", ...)
    pub region: String,
    #[serde(default)]
    pub system: Option<System>,
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default)]
    pub disc_number: Option<u32>,
    /// Edition label: "Greatest Hits", "Platinum", etc.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub status: DumpStatus,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    ring_codes: Vec<RingCode>,
    #[serde(default)]
    pub lib_crypt: bool,
    #[serde(default)]
    pub edc: bool,
    #[serde(default)]
    pub anti_modchip: bool,
    /// Number of unrecoverable read errors reported by the dumping tool
    #[serde(default)]
    pub error_count: Option<u32>,
}

impl Dump {
    pub fn new(id: impl Into<String>, title: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            region: region.into(),
            system: None,
            tracks: Vec::new(),
            disc_number: None,
            label: None,
            languages: Vec::new(),
            status: DumpStatus::default(),
            comments: None,
            ring_codes: Vec::new(),
            lib_crypt: false,
            edc: false,
            anti_modchip: false,
            error_count: None,
        }
    }

    pub fn with_system(mut self, system: System) -> Self {
        self.system = Some(system);
        self
    }

    pub fn with_disc_number(mut self, disc_number: u32) -> Self {
        self.disc_number = Some(disc_number);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_status(mut self, status: DumpStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder form of [`Dump::set_tracks`].
    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Result<Self, ModelError> {
        self.set_tracks(tracks)?;
        Ok(self)
    }

    /// Tracks in stored order (not necessarily sorted).
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn ring_codes(&self) -> &[RingCode] {
        &self.ring_codes
    }

    /// Replace the whole track collection.
    ///
    /// The new list is validated first; on error the existing tracks are
    /// left untouched.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) -> Result<(), ModelError> {
        Self::validate_tracks(&tracks)?;
        self.tracks = tracks;
        Ok(())
    }

    /// Replace the whole ring code collection.
    pub fn set_ring_codes(&mut self, ring_codes: Vec<RingCode>) {
        self.ring_codes = ring_codes;
    }

    /// Check track numbering: unique positive numbers, the lowest being 1.
    ///
    /// An empty list is accepted. Gaps after track 1 are not an error.
    pub fn validate_tracks(tracks: &[Track]) -> Result<(), ModelError> {
        let mut seen = HashSet::with_capacity(tracks.len());
        for track in tracks {
            if track.number == 0 {
                return Err(ModelError::InvalidTrackNumber(track.number));
            }
            if !seen.insert(track.number) {
                return Err(ModelError::DuplicateTrack(track.number));
            }
        }
        match seen.iter().min() {
            Some(&lowest) if lowest != 1 => Err(ModelError::MissingFirstTrack { lowest }),
            _ => Ok(()),
        }
    }

    /// Tracks sorted ascending by number. The sort is stable.
    pub fn sorted_tracks(&self) -> Vec<&Track> {
        let mut sorted: Vec<&Track> = self.tracks.iter().collect();
        sorted.sort_by_key(|t| t.number);
        sorted
    }

    /// The lowest-numbered track, if the dump has any.
    pub fn first_track(&self) -> Option<&Track> {
        self.tracks.iter().min_by_key(|t| t.number)
    }

    /// Sum of all track sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.tracks.iter().map(|t| t.size).sum()
    }

    /// Display name of the region, or the raw code when it isn't in the table.
    pub fn region_name(&self) -> &str {
        match Region::from_code(&self.region) {
            Some(region) => region.name(),
            None => &self.region,
        }
    }
}

#[cfg(test)]
#[path = "tests/dump_tests.rs"]
mod tests;
