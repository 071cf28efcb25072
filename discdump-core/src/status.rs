use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Verification state of a dump, serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DumpStatus {
    #[default]
    Unknown,
    Pending,
    Verified,
    Unverified,
    Incomplete,
    NotFound,
    BadDump,
}

const ALL_STATUSES: &[DumpStatus] = &[
    DumpStatus::Unknown,
    DumpStatus::Pending,
    DumpStatus::Verified,
    DumpStatus::Unverified,
    DumpStatus::Incomplete,
    DumpStatus::NotFound,
    DumpStatus::BadDump,
];

impl DumpStatus {
    pub fn all() -> &'static [DumpStatus] {
        ALL_STATUSES
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Pending => 1,
            Self::Verified => 2,
            Self::Unverified => 3,
            Self::Incomplete => 4,
            Self::NotFound => 5,
            Self::BadDump => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Unverified => "Unverified",
            Self::Incomplete => "Incomplete",
            Self::NotFound => "Not found",
            Self::BadDump => "Bad dump",
        }
    }

    pub fn from_code(code: u8) -> Result<Self, ModelError> {
        ALL_STATUSES
            .get(code as usize)
            .copied()
            .ok_or(ModelError::UnknownStatus(code))
    }
}

impl TryFrom<u8> for DumpStatus {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<DumpStatus> for u8 {
    fn from(status: DumpStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for DumpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
