//! Grid renderer
//!
//! Pulls rows from a [`PlotSource`], maps them to [`CellView`]s and hands
//! the whole batch to a [`CellSink`] in one call. The sink is the only
//! part that knows about a concrete container.

use crate::cell::{CellOptions, CellView, build_cells};
use crate::result::Result;
use crate::source::PlotSource;
use crate::wiring::Wiring;

/// Container adapter that materializes cell descriptions.
pub trait CellSink {
    /// Append all cells at once, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AppendFailed`] when the container rejects the batch.
    fn append_batch(&mut self, cells: &[CellView]) -> Result<()>;
}

impl<T: CellSink + ?Sized> CellSink for &mut T {
    fn append_batch(&mut self, cells: &[CellView]) -> Result<()> {
        (**self).append_batch(cells)
    }
}

/// In-memory sink, useful for server-side snapshots and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecSink {
    pub cells: Vec<CellView>,
    pub batches: usize,
}

impl CellSink for VecSink {
    fn append_batch(&mut self, cells: &[CellView]) -> Result<()> {
        self.cells.extend_from_slice(cells);
        self.batches = self.batches.saturating_add(1);
        Ok(())
    }
}

/// Renders plot rows into a container.
#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    options: CellOptions,
}

impl GridRenderer {
    pub const fn new(options: CellOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &CellOptions {
        &self.options
    }

    /// Render every plot of `source` into `container`.
    ///
    /// An absent container is a no-op: the source is not read and
    /// [`Wiring::NotWired`] is returned. Otherwise all cells are built
    /// before the sink is touched, so a failing cell leaves the container
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Propagates source, mapping and sink errors.
    pub fn render<S, K>(&self, source: &S, container: Option<&mut K>) -> Result<Wiring>
    where
        S: PlotSource + ?Sized,
        K: CellSink + ?Sized,
    {
        let Some(sink) = container else {
            tracing::debug!("Grid container absent, skipping render");
            return Ok(Wiring::NotWired);
        };

        let rows = source.rows()?;
        let cells = build_cells(&rows, &self.options)?;
        sink.append_batch(&cells)?;

        tracing::info!(rows = rows.len(), cells = cells.len(), "Rendered plot grid");
        Ok(Wiring::Wired)
    }
}
