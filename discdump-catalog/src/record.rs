//! On-disk shape of a dump record.

use serde::{Deserialize, Serialize};

use discdump_core::{Dump, DumpStatus, ModelError, RingCode, System, Track};

/// A dump as written in `dumps/*.yaml`.
///
/// Identical to [`Dump`] except that `system` is an id referring to a file
/// in `systems/` rather than an embedded record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpRecord {
    pub id: String,
    pub title: String,
    pub region: String,
    /// Id of the system this disc belongs to
    pub system: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub disc_number: Option<u32>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub status: DumpStatus,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub ring_codes: Vec<RingCode>,
    #[serde(default)]
    pub lib_crypt: bool,
    #[serde(default)]
    pub edc: bool,
    #[serde(default)]
    pub anti_modchip: bool,
    #[serde(default)]
    pub error_count: Option<u32>,
}

impl DumpRecord {
    /// Build a [`Dump`], attaching the resolved system (if any).
    ///
    /// Fails if the track numbering or any track checksum is invalid.
    pub fn into_dump(self, system: Option<System>) -> Result<Dump, ModelError> {
        for track in &self.tracks {
            track.validate_checksums()?;
        }

        let mut dump = Dump::new(self.id, self.title, self.region);
        dump.system = system;
        dump.disc_number = self.disc_number;
        dump.label = self.label;
        dump.languages = self.languages;
        dump.status = self.status;
        dump.comments = self.comments;
        dump.lib_crypt = self.lib_crypt;
        dump.edc = self.edc;
        dump.anti_modchip = self.anti_modchip;
        dump.error_count = self.error_count;
        dump.set_ring_codes(self.ring_codes);
        dump.set_tracks(self.tracks)?;
        Ok(dump)
    }
}
