//! Export formatter for catalogued disc dumps.
//!
//! Turns a [`Dump`](discdump_core::Dump) into the artifacts offered for
//! download: a CUE sheet, a Logiqx DAT descriptor, and the filenames they
//! are saved under. Everything here is a pure transform of its input,
//! except the DAT version date, which is read through a [`Clock`].

pub mod artifact;
pub mod clock;
pub mod cue;
pub mod dat;
pub mod error;
pub mod filename;
pub mod hasher;
pub mod msf;

pub use artifact::{ArtifactKind, ExportArtifact, cue_artifact, dat_artifact};
pub use clock::{Clock, FixedClock, SystemClock};
pub use cue::generate_cue;
pub use dat::{DatOptions, generate_dat};
pub use error::ExportError;
pub use filename::{generate_filename, generate_filename_with_ext, sanitize_title};
pub use hasher::{TrackHashes, hash_track, hash_track_file};
pub use msf::{FRAMES_PER_MINUTE, FRAMES_PER_SECOND, Msf, format_sectors};
