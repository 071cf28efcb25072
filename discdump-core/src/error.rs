use thiserror::Error;

use crate::checksum::ChecksumAlgorithm;

/// Errors raised when a record violates the data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Track type code outside the known table
    #[error("Unknown track type code: {0}")]
    UnknownTrackType(u8),

    /// Dump status code outside the known table
    #[error("Unknown dump status code: {0}")]
    UnknownStatus(u8),

    /// Track numbers are 1-based
    #[error("Invalid track number: {0}")]
    InvalidTrackNumber(u32),

    /// The same track number appears twice
    #[error("Duplicate track number: {0}")]
    DuplicateTrack(u32),

    /// Track numbering does not start at 1
    #[error("Track list must start at track 1 (lowest is {lowest})")]
    MissingFirstTrack { lowest: u32 },

    /// A checksum is not hex of the expected length
    #[error("Track {track}: invalid {algorithm} checksum '{value}'")]
    InvalidChecksum {
        track: u32,
        algorithm: ChecksumAlgorithm,
        value: String,
    },
}
