//! Plot status enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reservation status of a single plot.
///
/// Serialized as the lowercase name. Strings outside the three known
/// statuses are kept verbatim in [`PlotStatus::Unrecognized`] so the
/// renderer can decide how to report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlotStatus {
    Available,
    Reserved,
    Occupied,
    Unrecognized(String),
}

impl PlotStatus {
    /// All statuses that carry a label and a styling tag.
    pub const KNOWN: [Self; 3] = [Self::Available, Self::Reserved, Self::Occupied];

    /// Parse a wire value. Matching is exact, as the page data is.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "available" => Self::Available,
            "reserved" => Self::Reserved,
            "occupied" => Self::Occupied,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Wire name of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Occupied => "occupied",
            Self::Unrecognized(value) => value,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for PlotStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for PlotStatus {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<PlotStatus> for String {
    fn from(status: PlotStatus) -> Self {
        match status {
            PlotStatus::Unrecognized(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
