use serde::{Deserialize, Serialize};

/// Release regions recognized by the catalog.
///
/// Dumps store their region as a free-form code; this table maps the
/// standard codes to display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Asia,
    Australia,
    Brazil,
    China,
    Canada,
    Europe,
    France,
    Germany,
    Greece,
    HongKong,
    Italy,
    Japan,
    Korea,
    Netherlands,
    Norway,
    Poland,
    Portugal,
    Russia,
    Spain,
    Sweden,
    Usa,
    UnitedKingdom,
    World,
}

const ALL_REGIONS: &[Region] = &[
    Region::Asia,
    Region::Australia,
    Region::Brazil,
    Region::China,
    Region::Canada,
    Region::Europe,
    Region::France,
    Region::Germany,
    Region::Greece,
    Region::HongKong,
    Region::Italy,
    Region::Japan,
    Region::Korea,
    Region::Netherlands,
    Region::Norway,
    Region::Poland,
    Region::Portugal,
    Region::Russia,
    Region::Spain,
    Region::Sweden,
    Region::Usa,
    Region::UnitedKingdom,
    Region::World,
];

impl Region {
    /// All regions, ordered by code.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }

    /// Returns the short code for this region.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Asia => "A",
            Self::Australia => "AU",
            Self::Brazil => "BR",
            Self::China => "C",
            Self::Canada => "CA",
            Self::Europe => "E",
            Self::France => "F",
            Self::Germany => "G",
            Self::Greece => "GR",
            Self::HongKong => "HK",
            Self::Italy => "I",
            Self::Japan => "J",
            Self::Korea => "K",
            Self::Netherlands => "NL",
            Self::Norway => "NO",
            Self::Poland => "PL",
            Self::Portugal => "PT",
            Self::Russia => "R",
            Self::Spain => "S",
            Self::Sweden => "SW",
            Self::Usa => "U",
            Self::UnitedKingdom => "UK",
            Self::World => "W",
        }
    }

    /// Returns the full name of this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::Australia => "Australia",
            Self::Brazil => "Brazil",
            Self::China => "China",
            Self::Canada => "Canada",
            Self::Europe => "Europe",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Greece => "Greece",
            Self::HongKong => "Hong Kong",
            Self::Italy => "Italy",
            Self::Japan => "Japan",
            Self::Korea => "Korea",
            Self::Netherlands => "Netherlands",
            Self::Norway => "Norway",
            Self::Poland => "Poland",
            Self::Portugal => "Portugal",
            Self::Russia => "Russia",
            Self::Spain => "Spain",
            Self::Sweden => "Sweden",
            Self::Usa => "USA",
            Self::UnitedKingdom => "United Kingdom",
            Self::World => "World",
        }
    }

    /// Look up a region by its short code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        let upper = code.trim().to_ascii_uppercase();
        ALL_REGIONS.iter().copied().find(|r| r.code() == upper)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
