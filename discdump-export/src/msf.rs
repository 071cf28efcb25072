//! Sector counts rendered as CD time (`MM:SS:FF`).

/// Sectors (frames) per second of playback.
pub const FRAMES_PER_SECOND: u32 = 75;

/// Sectors per minute of playback.
pub const FRAMES_PER_MINUTE: u32 = 60 * FRAMES_PER_SECOND;

/// A position expressed as minutes, seconds and frames.
///
/// Minutes are unbounded; seconds are `< 60` and frames `< 75`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Msf {
    pub fn from_sectors(sectors: u32) -> Self {
        Self {
            minutes: sectors / FRAMES_PER_MINUTE,
            seconds: (sectors % FRAMES_PER_MINUTE) / FRAMES_PER_SECOND,
            frames: sectors % FRAMES_PER_SECOND,
        }
    }

    pub fn to_sectors(&self) -> u32 {
        self.minutes * FRAMES_PER_MINUTE + self.seconds * FRAMES_PER_SECOND + self.frames
    }
}

impl std::fmt::Display for Msf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.minutes, self.seconds, self.frames
        )
    }
}

/// Render a sector count as `MM:SS:FF`.
///
/// Minutes past 99 keep all their digits: 450000 sectors is `"100:00:00"`.
pub fn format_sectors(sectors: u32) -> String {
    Msf::from_sectors(sectors).to_string()
}

#[cfg(test)]
#[path = "tests/msf_tests.rs"]
mod tests;
