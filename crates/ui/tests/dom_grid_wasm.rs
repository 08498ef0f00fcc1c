//! Tests for the web-sys grid adapter
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox crates/ui

#![cfg(target_arch = "wasm32")]

use plotgrid_core::{CellOptions, CellSink, GridRenderer, SamplePlots, StaticPlots, Wiring};
use plotgrid_ui::dom::{DomGrid, query};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("should have document")
}

fn fresh_container(id: &str) -> Element {
    let document = document();
    let container = document.create_element("div").expect("create container");
    container.set_id(id);
    document
        .body()
        .expect("should have body")
        .append_child(&container)
        .expect("append container");
    container
}

#[wasm_bindgen_test]
fn test_sample_rows_render_twelve_cells_in_order() {
    let container = fresh_container("grid-sample");
    let mut grid = DomGrid::new(document(), container.clone());

    let wiring = GridRenderer::default()
        .render(&SamplePlots, Some(&mut grid))
        .expect("render should succeed");

    assert_eq!(wiring, Wiring::Wired);
    let cells = container.children();
    assert_eq!(cells.length(), 12);

    let first = cells.item(0).expect("first cell");
    assert_eq!(first.class_name(), "cell cell--available");
    assert_eq!(
        first.text_content().as_deref(),
        Some("Fila A · A-01DisponibleDisponible para asignar")
    );

    let last = cells.item(11).expect("last cell");
    assert_eq!(last.class_name(), "cell cell--reserved");
}

#[wasm_bindgen_test]
fn test_cell_has_three_spans_in_order() {
    let container = fresh_container("grid-spans");
    let mut grid = DomGrid::new(document(), container.clone());
    GridRenderer::default()
        .render(&SamplePlots, Some(&mut grid))
        .expect("render should succeed");

    let cell = container.children().item(1).expect("second cell");
    let spans = cell.children();
    assert_eq!(spans.length(), 3);

    let classes: Vec<String> = (0..3)
        .filter_map(|i| spans.item(i))
        .map(|span| span.class_name())
        .collect();
    assert_eq!(classes, ["cell__row", "cell__status", "cell__holder"]);

    let holder = spans.item(2).expect("holder span");
    assert_eq!(holder.text_content().as_deref(), Some("Familia Ortega"));
}

#[wasm_bindgen_test]
fn test_holder_color_follows_tone() {
    let container = fresh_container("grid-tone");
    let mut grid = DomGrid::new(document(), container.clone());
    GridRenderer::default()
        .render(&SamplePlots, Some(&mut grid))
        .expect("render should succeed");

    let holder_color = |index: u32| {
        container
            .children()
            .item(index)
            .and_then(|cell| cell.children().item(2))
            .and_then(|span| span.dyn_into::<HtmlElement>().ok())
            .and_then(|span| span.style().get_property_value("color").ok())
            .expect("holder color")
    };

    assert_eq!(holder_color(0), "var(--accent)");
    assert_eq!(holder_color(1), "var(--text-muted)");
}

#[wasm_bindgen_test]
fn test_existing_children_are_kept() {
    let container = fresh_container("grid-existing");
    container.set_inner_html("<p class=\"legend\">Leyenda</p>");
    let mut grid = DomGrid::new(document(), container.clone());

    grid.append_batch(&[]).expect("empty batch should succeed");
    assert_eq!(container.children().length(), 1);

    GridRenderer::new(CellOptions::default())
        .render(&StaticPlots::default(), Some(&mut grid))
        .expect("render should succeed");
    assert_eq!(container.children().length(), 1);
}

#[wasm_bindgen_test]
fn test_query_missing_element_is_none() {
    let found = query(&document(), "#no-such-grid").expect("valid selector");
    assert!(found.is_none());
}

#[wasm_bindgen_test]
fn test_query_invalid_selector_is_error() {
    assert!(query(&document(), "##broken").is_err());
}
