//! Page-load wiring
//!
//! Reads the page's optional config and data elements, renders the grid
//! into its container, and wires the feedback trigger. The two components
//! are independent: a failure in one is reported without stopping the other.

use plotgrid_core::{
    FeedbackNotifier, GridRenderer, JsonPlots, PageConfig, PlotSource, SamplePlots, Wiring,
};
use web_sys::Document;

use crate::dom::{DomGrid, query};
use crate::error::{Result, UiError};
use crate::notify::{AlertNotifier, wire_feedback_trigger};

/// Element holding a TOML [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "plotgrid-config";
/// Element holding a JSON array of plot rows.
pub const DATA_ELEMENT_ID: &str = "plotgrid-data";

/// Outcome of [`boot`], one entry per component.
#[derive(Debug, Clone, PartialEq)]
pub struct BootReport {
    pub grid: Result<Wiring>,
    pub feedback: Result<Wiring>,
}

impl BootReport {
    /// Neither component found its element and neither failed.
    #[must_use]
    pub fn nothing_found(&self) -> bool {
        matches!(self.grid, Ok(Wiring::NotWired)) && matches!(self.feedback, Ok(Wiring::NotWired))
    }
}

fn embedded_text(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Config from `#plotgrid-config`, defaults when absent or malformed.
pub fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = embedded_text(document, CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    PageConfig::from_toml_or_default(&raw, |e| {
        web_sys::console::error_1(&format!("Invalid page config, using defaults: {e}").into());
    })
}

/// Rows from `#plotgrid-data`, the sample rows when absent or malformed.
pub fn load_source(document: &Document) -> Box<dyn PlotSource> {
    let Some(raw) = embedded_text(document, DATA_ELEMENT_ID) else {
        return Box::new(SamplePlots);
    };
    Box::new(JsonPlots::new(raw).parse_or_sample(|e| {
        web_sys::console::error_1(&format!("Invalid plot data, using sample rows: {e}").into());
    }))
}

/// Render the grid into the configured container, if the page has one.
///
/// # Errors
///
/// Returns selector, mapping or DOM errors.
pub fn render_grid(
    document: &Document,
    config: &PageConfig,
    source: &dyn PlotSource,
) -> Result<Wiring> {
    let mut grid = query(document, &config.grid_selector)?
        .map(|container| DomGrid::new(document.clone(), container));
    let renderer = GridRenderer::new(config.cell_options());
    Ok(renderer.render(source, grid.as_mut())?)
}

/// Attach the feedback notifier to the configured trigger, if present.
///
/// # Errors
///
/// Returns selector or listener errors.
pub fn wire_feedback(document: &Document, config: &PageConfig) -> Result<Wiring> {
    let trigger = query(document, &config.trigger_selector)?;
    let feedback = FeedbackNotifier::new(AlertNotifier, config.feedback_message.clone());
    Ok(wire_feedback_trigger(trigger, feedback)?)
}

/// Wire both components against `document`.
pub fn boot(document: &Document) -> BootReport {
    let config = load_config(document);
    let source = load_source(document);

    let report = BootReport {
        grid: render_grid(document, &config, source.as_ref()),
        feedback: wire_feedback(document, &config),
    };

    log_outcome("Plot grid", &report.grid);
    log_outcome("Feedback notifier", &report.feedback);
    report
}

fn log_outcome(component: &str, outcome: &Result<Wiring>) {
    match outcome {
        Ok(wiring) => web_sys::console::log_1(&format!("{component}: {wiring}").into()),
        Err(e) => web_sys::console::error_1(&format!("{component} failed: {e}").into()),
    }
}

/// Current window's document.
///
/// # Errors
///
/// Returns [`UiError::NoWindow`] or [`UiError::NoDocument`] outside a browser.
pub fn current_document() -> Result<Document> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_found() {
        let report = BootReport {
            grid: Ok(Wiring::NotWired),
            feedback: Ok(Wiring::NotWired),
        };
        assert!(report.nothing_found());

        let report = BootReport {
            grid: Ok(Wiring::NotWired),
            feedback: Ok(Wiring::Wired),
        };
        assert!(!report.nothing_found());

        let report = BootReport {
            grid: Err(UiError::NoDocument),
            feedback: Ok(Wiring::NotWired),
        };
        assert!(!report.nothing_found());
    }
}
