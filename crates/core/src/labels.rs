//! Display labels for plot statuses

use serde::{Deserialize, Serialize};

use crate::status::PlotStatus;

/// Label shown for a status outside the known set under [`UnknownStatusPolicy::Fallback`].
pub const UNKNOWN_STATUS_LABEL: &str = "Unknown";

/// Status to display string mapping.
///
/// One field per known status so a missing key cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub available: String,
    pub reserved: String,
    pub occupied: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            available: "Disponible".to_string(),
            reserved: "Reservado".to_string(),
            occupied: "Ocupado".to_string(),
        }
    }
}

impl StatusLabels {
    /// Label for a known status, `None` for an unrecognized one.
    #[must_use]
    pub fn get(&self, status: &PlotStatus) -> Option<&str> {
        match status {
            PlotStatus::Available => Some(&self.available),
            PlotStatus::Reserved => Some(&self.reserved),
            PlotStatus::Occupied => Some(&self.occupied),
            PlotStatus::Unrecognized(_) => None,
        }
    }
}

/// What the renderer does with a status it has no label for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownStatusPolicy {
    /// Abort the render with [`crate::Error::UnknownStatus`].
    FailFast,
    /// Render the cell with [`UNKNOWN_STATUS_LABEL`] and log a warning.
    Fallback,
}

impl Default for UnknownStatusPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::FailFast
        } else {
            Self::Fallback
        }
    }
}
