//! Plot data sources
//!
//! The renderer asks a [`PlotSource`] for rows instead of reading a
//! hardcoded list, so real data can be substituted without touching
//! rendering.

use crate::error::Error;
use crate::plot::{Plot, PlotRow};
use crate::result::{Result, ResultExt};

/// Provides the ordered rows to render.
pub trait PlotSource {
    /// Rows in display order.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying data cannot be produced.
    fn rows(&self) -> Result<Vec<PlotRow>>;
}

/// Built-in demonstration rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePlots;

impl PlotSource for SamplePlots {
    fn rows(&self) -> Result<Vec<PlotRow>> {
        Ok(sample_rows())
    }
}

/// The four demonstration rows shown when a page embeds no data.
#[must_use]
pub fn sample_rows() -> Vec<PlotRow> {
    vec![
        PlotRow::new("Fila A").with_plots([
            Plot::available("A-01"),
            Plot::reserved("A-02", "Familia Ortega"),
            Plot::occupied("A-03", "Familia Díaz"),
        ]),
        PlotRow::new("Fila B").with_plots([
            Plot::available("B-01"),
            Plot::occupied("B-02", "Familia Méndez"),
            Plot::reserved("B-03", "Familia Silva"),
        ]),
        PlotRow::new("Fila C").with_plots([
            Plot::reserved("C-01", "Familia Guerrero"),
            Plot::available("C-02"),
            Plot::occupied("C-03", "Familia Rosas"),
        ]),
        PlotRow::new("Fila D").with_plots([
            Plot::available("D-01"),
            Plot::available("D-02"),
            Plot::reserved("D-03", "Familia Nuñez"),
        ]),
    ]
}

/// Rows supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPlots {
    rows: Vec<PlotRow>,
}

impl StaticPlots {
    pub const fn new(rows: Vec<PlotRow>) -> Self {
        Self { rows }
    }
}

impl From<Vec<PlotRow>> for StaticPlots {
    fn from(rows: Vec<PlotRow>) -> Self {
        Self::new(rows)
    }
}

impl PlotSource for StaticPlots {
    fn rows(&self) -> Result<Vec<PlotRow>> {
        Ok(self.rows.clone())
    }
}

/// Rows parsed from a JSON array of `{ "row": ..., "plots": [...] }`.
///
/// Parsing happens on every [`PlotSource::rows`] call; the raw document is
/// what gets stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPlots {
    raw: String,
}

impl JsonPlots {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Parse now, substituting [`sample_rows`] when the document is malformed.
    ///
    /// `on_error` sees the parse error before the fallback is taken.
    pub fn parse_or_sample<F: FnOnce(&Error)>(&self, on_error: F) -> StaticPlots {
        StaticPlots::new(self.rows().inspect_error(on_error).or_else_logged(sample_rows))
    }
}

impl PlotSource for JsonPlots {
    fn rows(&self) -> Result<Vec<PlotRow>> {
        Ok(serde_json::from_str(&self.raw)?)
    }
}

impl<S: PlotSource + ?Sized> PlotSource for &S {
    fn rows(&self) -> Result<Vec<PlotRow>> {
        (**self).rows()
    }
}

impl<S: PlotSource + ?Sized> PlotSource for Box<S> {
    fn rows(&self) -> Result<Vec<PlotRow>> {
        (**self).rows()
    }
}
