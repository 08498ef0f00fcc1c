//! Plot and row records

use serde::{Deserialize, Serialize};

use crate::status::PlotStatus;

/// A single burial or reservation unit.
///
/// `holder` is expected only on reserved or occupied plots. The data is
/// trusted and this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    pub id: String,
    pub status: PlotStatus,
    #[serde(default)]
    pub holder: Option<String>,
}

impl Plot {
    /// Creates a plot with no holder
    pub fn new(id: impl Into<String>, status: PlotStatus) -> Self {
        Self {
            id: id.into(),
            status,
            holder: None,
        }
    }

    /// Shorthand for an available plot
    pub fn available(id: impl Into<String>) -> Self {
        Self::new(id, PlotStatus::Available)
    }

    /// Shorthand for a reserved plot with its holder
    pub fn reserved(id: impl Into<String>, holder: impl Into<String>) -> Self {
        Self::new(id, PlotStatus::Reserved).with_holder(holder)
    }

    /// Shorthand for an occupied plot with its holder
    pub fn occupied(id: impl Into<String>, holder: impl Into<String>) -> Self {
        Self::new(id, PlotStatus::Occupied).with_holder(holder)
    }

    /// Builder pattern: set holder
    #[must_use]
    pub fn with_holder(mut self, holder: impl Into<String>) -> Self {
        self.holder = Some(holder.into());
        self
    }
}

/// A named row of plots, rendered in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotRow {
    pub row: String,
    #[serde(default)]
    pub plots: Vec<Plot>,
}

impl PlotRow {
    pub fn new(row: impl Into<String>) -> Self {
        Self {
            row: row.into(),
            plots: Vec::new(),
        }
    }

    /// Builder pattern: append a plot
    #[must_use]
    pub fn with_plot(mut self, plot: Plot) -> Self {
        self.plots.push(plot);
        self
    }

    /// Builder pattern: append several plots
    #[must_use]
    pub fn with_plots(mut self, plots: impl IntoIterator<Item = Plot>) -> Self {
        self.plots.extend(plots);
        self
    }
}

/// Total number of plots across rows.
#[must_use]
pub fn plot_count(rows: &[PlotRow]) -> usize {
    rows.iter().map(|row| row.plots.len()).sum()
}
