use serde::{Deserialize, Serialize};

use crate::checksum::ChecksumAlgorithm;
use crate::error::ModelError;

/// Track data layout, stored and serialized as its numeric code.
///
/// Codes outside `0..=14` are rejected with [`ModelError::UnknownTrackType`]
/// rather than resolving to a placeholder label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TrackType {
    Audio,
    Mode1,
    Mode2,
    Mode2Form1,
    Mode2Form2,
    Mode2FormMix,
    Interactive,
    Cdi,
    CdiReady,
    CdiApplication,
    Xa,
    XaForm1,
    XaForm2,
    XaMix,
    Unknown,
}

/// All track types in code order.
const ALL_TRACK_TYPES: &[TrackType] = &[
    TrackType::Audio,
    TrackType::Mode1,
    TrackType::Mode2,
    TrackType::Mode2Form1,
    TrackType::Mode2Form2,
    TrackType::Mode2FormMix,
    TrackType::Interactive,
    TrackType::Cdi,
    TrackType::CdiReady,
    TrackType::CdiApplication,
    TrackType::Xa,
    TrackType::XaForm1,
    TrackType::XaForm2,
    TrackType::XaMix,
    TrackType::Unknown,
];

impl TrackType {
    /// All track types, ordered by code.
    pub fn all() -> &'static [TrackType] {
        ALL_TRACK_TYPES
    }

    /// Numeric code as stored in catalog records.
    pub fn code(&self) -> u8 {
        match self {
            Self::Audio => 0,
            Self::Mode1 => 1,
            Self::Mode2 => 2,
            Self::Mode2Form1 => 3,
            Self::Mode2Form2 => 4,
            Self::Mode2FormMix => 5,
            Self::Interactive => 6,
            Self::Cdi => 7,
            Self::CdiReady => 8,
            Self::CdiApplication => 9,
            Self::Xa => 10,
            Self::XaForm1 => 11,
            Self::XaForm2 => 12,
            Self::XaMix => 13,
            Self::Unknown => 14,
        }
    }

    /// Human-readable label, as written into CUE sheets.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Audio => "Audio",
            Self::Mode1 => "Mode 1",
            Self::Mode2 => "Mode 2",
            Self::Mode2Form1 => "Mode 2 Form 1",
            Self::Mode2Form2 => "Mode 2 Form 2",
            Self::Mode2FormMix => "Mode 2 Form Mix",
            Self::Interactive => "Interactive",
            Self::Cdi => "CDI",
            Self::CdiReady => "CDI Ready",
            Self::CdiApplication => "CDI Application",
            Self::Xa => "XA",
            Self::XaForm1 => "XA Form 1",
            Self::XaForm2 => "XA Form 2",
            Self::XaMix => "XA Mix",
            Self::Unknown => "Unknown",
        }
    }

    /// Look up a track type by code.
    pub fn from_code(code: u8) -> Result<Self, ModelError> {
        ALL_TRACK_TYPES
            .get(code as usize)
            .copied()
            .ok_or(ModelError::UnknownTrackType(code))
    }
}

impl TryFrom<u8> for TrackType {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<TrackType> for u8 {
    fn from(track_type: TrackType) -> Self {
        track_type.code()
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One audio or data session on a disc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// 1-based sequence number
    pub number: u32,
    #[serde(rename = "type")]
    pub track_type: TrackType,
    /// Size of the track image in bytes
    pub size: u64,
    /// Leading gap before INDEX 01, in sectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pregap: Option<u32>,
    /// Start of the track's indexed data, in sectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Length of the track in sectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sectors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crc32: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
}

impl Track {
    pub fn new(number: u32, track_type: TrackType, size: u64) -> Self {
        Self {
            number,
            track_type,
            size,
            pregap: None,
            offset: None,
            sectors: None,
            crc32: None,
            md5: None,
            sha1: None,
        }
    }

    pub fn with_pregap(mut self, sectors: u32) -> Self {
        self.pregap = Some(sectors);
        self
    }

    pub fn with_offset(mut self, sectors: u32) -> Self {
        self.offset = Some(sectors);
        self
    }

    pub fn with_sectors(mut self, sectors: u32) -> Self {
        self.sectors = Some(sectors);
        self
    }

    pub fn with_crc32(mut self, crc32: impl Into<String>) -> Self {
        self.crc32 = Some(crc32.into());
        self
    }

    pub fn with_md5(mut self, md5: impl Into<String>) -> Self {
        self.md5 = Some(md5.into());
        self
    }

    pub fn with_sha1(mut self, sha1: impl Into<String>) -> Self {
        self.sha1 = Some(sha1.into());
        self
    }

    /// Pregap in sectors, treating an absent value as zero.
    pub fn pregap_sectors(&self) -> u32 {
        self.pregap.unwrap_or(0)
    }

    /// Offset in sectors, treating an absent value as zero.
    pub fn offset_sectors(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// The checksum recorded for `algorithm`, if any.
    pub fn checksum(&self, algorithm: ChecksumAlgorithm) -> Option<&str> {
        match algorithm {
            ChecksumAlgorithm::Crc32 => self.crc32.as_deref(),
            ChecksumAlgorithm::Md5 => self.md5.as_deref(),
            ChecksumAlgorithm::Sha1 => self.sha1.as_deref(),
        }
    }

    /// Check that every recorded checksum is hex of the right length.
    pub fn validate_checksums(&self) -> Result<(), ModelError> {
        for algorithm in [
            ChecksumAlgorithm::Crc32,
            ChecksumAlgorithm::Md5,
            ChecksumAlgorithm::Sha1,
        ] {
            if let Some(value) = self.checksum(algorithm) {
                if !algorithm.is_valid_hex(value) {
                    return Err(ModelError::InvalidChecksum {
                        track: self.number,
                        algorithm,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/track_tests.rs"]
mod tests;
