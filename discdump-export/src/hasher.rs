//! Checksums for track images, for filling in new track records.

use std::io::Read;
use std::path::Path;

use sha1::Digest;

use discdump_core::{Track, TrackType};

use crate::error::ExportError;

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Size and checksums of one track image (lowercase hex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackHashes {
    pub size: u64,
    pub crc32: String,
    pub md5: String,
    pub sha1: String,
}

impl TrackHashes {
    /// Build a track record carrying these hashes.
    pub fn into_track(self, number: u32, track_type: TrackType) -> Track {
        Track::new(number, track_type, self.size)
            .with_crc32(self.crc32)
            .with_md5(self.md5)
            .with_sha1(self.sha1)
    }
}

/// Compute size, CRC32, MD5 and SHA1 in a single pass over `reader`.
pub fn hash_track<R: Read>(mut reader: R) -> Result<TrackHashes, ExportError> {
    let mut crc = crc32fast::Hasher::new();
    let mut md5_ctx = md5::Context::new();
    let mut sha = sha1::Sha1::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut size: u64 = 0;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        crc.update(&buf[..n]);
        md5_ctx.consume(&buf[..n]);
        sha.update(&buf[..n]);
        size += n as u64;
    }

    Ok(TrackHashes {
        size,
        crc32: format!("{:08x}", crc.finalize()),
        md5: format!("{:x}", md5_ctx.compute()),
        sha1: format!("{:x}", sha.finalize()),
    })
}

/// [`hash_track`] over a file on disk.
pub fn hash_track_file(path: &Path) -> Result<TrackHashes, ExportError> {
    let file = std::fs::File::open(path)?;
    let hashes = hash_track(std::io::BufReader::new(file))?;
    log::debug!("Hashed {} ({} bytes)", path.display(), hashes.size);
    Ok(hashes)
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;
