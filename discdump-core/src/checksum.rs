/// Checksums recorded per track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    /// CRC-32 (8 hex digits)
    Crc32,
    /// MD5 (32 hex digits)
    Md5,
    /// SHA-1 (40 hex digits)
    Sha1,
}

impl ChecksumAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc32 => "CRC-32",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
        }
    }

    /// Number of hex digits in a rendered digest.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Crc32 => 8,
            Self::Md5 => 32,
            Self::Sha1 => 40,
        }
    }

    /// Whether `value` is a hex digest of the right length for this algorithm.
    ///
    /// Case-insensitive: DAT files in the wild use both upper and lower case.
    pub fn is_valid_hex(&self, value: &str) -> bool {
        value.len() == self.hex_len() && value.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl std::fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
