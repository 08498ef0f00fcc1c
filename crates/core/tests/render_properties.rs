//! Property tests for the grid renderer
//!
//! Generated rows of arbitrary shape must map to cells one-to-one, in
//! row-major order, with the holder and tag rules applied per plot.

#![allow(clippy::indexing_slicing)]

use plotgrid_core::{
    CellOptions, GridRenderer, HolderTone, Plot, PlotRow, PlotStatus, StaticPlots, VecSink,
    Wiring,
};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = PlotStatus> {
    prop_oneof![
        Just(PlotStatus::Available),
        Just(PlotStatus::Reserved),
        Just(PlotStatus::Occupied),
    ]
}

fn plot_strategy() -> impl Strategy<Value = Plot> {
    ("[A-Z]-[0-9]{2}", status_strategy(), "[A-Za-zñé ]{1,16}").prop_map(|(id, status, holder)| {
        let plot = Plot::new(id, status.clone());
        match status {
            PlotStatus::Available => plot,
            _ => plot.with_holder(holder),
        }
    })
}

fn rows_strategy() -> impl Strategy<Value = Vec<PlotRow>> {
    prop::collection::vec(
        ("Fila [A-Z]", prop::collection::vec(plot_strategy(), 0..6))
            .prop_map(|(name, plots)| PlotRow::new(name).with_plots(plots)),
        0..8,
    )
}

proptest! {
    /// Property: one cell per plot, in row-major order, in a single batch
    #[test]
    fn prop_cells_mirror_input_order(rows in rows_strategy()) {
        let mut sink = VecSink::default();
        let wiring = GridRenderer::new(CellOptions::default())
            .render(&StaticPlots::new(rows.clone()), Some(&mut sink));

        prop_assert_eq!(wiring, Ok(Wiring::Wired));
        prop_assert_eq!(sink.batches, 1);

        let expected: Vec<String> = rows
            .iter()
            .flat_map(|row| row.plots.iter().map(move |p| format!("{} · {}", row.row, p.id)))
            .collect();
        let actual: Vec<String> = sink.cells.iter().map(|c| c.row_label.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: holder and tag rules hold for every cell
    #[test]
    fn prop_holder_and_tags(rows in rows_strategy()) {
        let mut sink = VecSink::default();
        GridRenderer::new(CellOptions::default())
            .render(&StaticPlots::new(rows.clone()), Some(&mut sink))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let plots = rows.iter().flat_map(|row| row.plots.iter());
        for (plot, cell) in plots.zip(sink.cells.iter()) {
            prop_assert_eq!(&cell.classes[0], "cell");
            prop_assert_eq!(cell.classes[1].clone(), format!("cell--{}", plot.status));

            match plot.holder.as_deref() {
                Some(holder) => {
                    prop_assert_eq!(cell.holder_label.as_str(), holder);
                    prop_assert_eq!(cell.holder_tone, HolderTone::Muted);
                }
                None => {
                    prop_assert_eq!(cell.holder_label.as_str(), "Disponible para asignar");
                    prop_assert_eq!(cell.holder_tone, HolderTone::Accent);
                }
            }
        }
    }
}
