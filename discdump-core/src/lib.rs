//! Core data model for the disc dump catalog.
//!
//! Dumps, their tracks, the systems they belong to, and the static lookup
//! tables (track types, regions, dump statuses) shared by the export and
//! catalog crates.

pub mod checksum;
pub mod dump;
pub mod error;
pub mod region;
pub mod status;
pub mod track;

pub use checksum::ChecksumAlgorithm;
pub use dump::{Dump, RingCode, System};
pub use error::ModelError;
pub use region::Region;
pub use status::DumpStatus;
pub use track::{Track, TrackType};
