//! Tests for page-load wiring
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox crates/ui

#![cfg(target_arch = "wasm32")]

use plotgrid_core::{PageConfig, SamplePlots, UnknownStatusPolicy, Wiring};
use plotgrid_ui::UiError;
use plotgrid_ui::boot::{load_config, load_source, render_grid, wire_feedback};
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("should have document")
}

fn append_to_body(tag: &str, id: &str) -> Element {
    let document = document();
    let element = document.create_element(tag).expect("create element");
    element.set_id(id);
    document
        .body()
        .expect("should have body")
        .append_child(&element)
        .expect("append element");
    element
}

#[wasm_bindgen_test]
fn test_render_grid_without_container_is_not_wired() {
    let config = PageConfig {
        grid_selector: "#boot-missing-grid".to_string(),
        ..PageConfig::default()
    };

    let wiring = render_grid(&document(), &config, &SamplePlots).expect("no-op should succeed");
    assert_eq!(wiring, Wiring::NotWired);
}

#[wasm_bindgen_test]
fn test_render_grid_into_configured_container() {
    let container = append_to_body("div", "boot-grid");
    let config = PageConfig {
        grid_selector: "#boot-grid".to_string(),
        ..PageConfig::default()
    };

    let wiring = render_grid(&document(), &config, &SamplePlots).expect("render should succeed");
    assert_eq!(wiring, Wiring::Wired);
    assert_eq!(container.children().length(), 12);
}

#[wasm_bindgen_test]
fn test_fail_fast_unknown_status_leaves_container_empty() {
    let container = append_to_body("div", "boot-grid-unknown");
    let data = append_to_body("script", "plotgrid-data");
    data.set_attribute("type", "application/json").expect("set type");
    data.set_text_content(Some(
        r#"[{"row": "Fila E", "plots": [{"id": "E-01", "status": "sold", "holder": null}]}]"#,
    ));
    let config = PageConfig {
        grid_selector: "#boot-grid-unknown".to_string(),
        ..PageConfig::default()
    }
    .unknown_status(UnknownStatusPolicy::FailFast);

    let source = load_source(&document());
    let result = render_grid(&document(), &config, source.as_ref());
    data.remove();

    assert!(matches!(result, Err(UiError::Core(_))));
    assert_eq!(container.children().length(), 0);
}

#[wasm_bindgen_test]
fn test_malformed_embedded_data_renders_sample_rows() {
    let container = append_to_body("div", "boot-grid-malformed");
    let data = append_to_body("script", "plotgrid-data");
    data.set_attribute("type", "application/json").expect("set type");
    data.set_text_content(Some(r#"[{"row": "Fila A""#));
    let config = PageConfig {
        grid_selector: "#boot-grid-malformed".to_string(),
        ..PageConfig::default()
    };

    let source = load_source(&document());
    data.remove();
    let wiring = render_grid(&document(), &config, source.as_ref()).expect("fallback renders");

    assert_eq!(wiring, Wiring::Wired);
    assert_eq!(container.children().length(), 12);
}

#[wasm_bindgen_test]
fn test_wire_feedback_without_trigger_is_not_wired() {
    let config = PageConfig {
        trigger_selector: ".boot-missing-trigger".to_string(),
        ..PageConfig::default()
    };

    let wiring = wire_feedback(&document(), &config).expect("no-op should succeed");
    assert_eq!(wiring, Wiring::NotWired);
}

#[wasm_bindgen_test]
fn test_wire_feedback_with_trigger() {
    let button = append_to_body("button", "boot-trigger");
    button.set_class_name("boot-cta");
    let config = PageConfig {
        trigger_selector: ".boot-cta".to_string(),
        ..PageConfig::default()
    };

    let wiring = wire_feedback(&document(), &config).expect("wiring should succeed");
    assert_eq!(wiring, Wiring::Wired);
}

#[wasm_bindgen_test]
fn test_embedded_config_is_read() {
    let element = append_to_body("script", "plotgrid-config");
    element
        .set_attribute("type", "application/toml")
        .expect("set type");
    element.set_text_content(Some("grid_selector = \"#embedded-grid\""));

    let config = load_config(&document());
    element.remove();

    assert_eq!(config.grid_selector, "#embedded-grid");
    assert_eq!(config.trigger_selector, ".btn-primary");
}

#[wasm_bindgen_test]
fn test_malformed_embedded_config_falls_back() {
    let element = append_to_body("script", "plotgrid-config");
    element.set_text_content(Some("grid_selector = "));

    let config = load_config(&document());
    element.remove();

    assert_eq!(config, PageConfig::default());
}
