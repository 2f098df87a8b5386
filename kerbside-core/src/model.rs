//! Domain data structures for councils, properties, and collection schedules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in councils supported by the application.
pub enum Councils {
    /// Pembrokeshire County Council, Wales.
    Pembrokeshire,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a council known to kerbside.
pub struct CouncilId(pub String);

impl fmt::Display for Councils {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Councils::Pembrokeshire => "pembrokeshire",
        };
        write!(formatter, "{slug}")
    }
}

impl From<Councils> for CouncilId {
    fn from(council: Councils) -> Self {
        CouncilId(council.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a council and its human-friendly name.
pub struct CouncilMeta {
    /// Unique identifier.
    pub id: CouncilId,
    /// Localized display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Opaque property reference (UPRN-like) identifying an address in the
/// council's system. Passed to providers verbatim, never validated.
pub struct PropertyId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One scheduled bin pickup as published on a council page.
pub struct BinEntry {
    /// Exact label text from the source, e.g. "Blue Box (Paper)".
    /// Used as the lookup key into the bin catalog. Never empty.
    pub raw_name: String,
    /// Collection date as free display text, e.g. "Mon 14 Jul".
    /// Kept opaque; downstream consumers never do date arithmetic on it.
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Schedule for a single property, always well-formed and displayable.
pub struct CollectionResult {
    /// Free-text label for the regular collection day.
    /// [`CollectionResult::UNKNOWN_DAY`] when unavailable, never empty.
    pub collection_day_label: String,
    /// Scheduled pickups in page order. May be empty; "no data" and
    /// "lookup failed" are indistinguishable here by design.
    pub bins: Vec<BinEntry>,
}

impl CollectionResult {
    /// Sentinel day label used when the source publishes no usable day.
    pub const UNKNOWN_DAY: &'static str = "Unknown";

    /// The degraded result: unknown day, no pickups.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            collection_day_label: Self::UNKNOWN_DAY.to_owned(),
            bins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Display metadata for a bin type, produced by the catalog.
pub struct BinDisplay {
    /// Concise human-facing label.
    pub short_name: String,
    /// Path to the display icon.
    pub icon_ref: String,
}
