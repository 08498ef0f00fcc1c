//! web-sys adapter that turns cell descriptions into DOM nodes.
//!
//! All cells are built into a detached `DocumentFragment` and the fragment
//! is appended to the container once, so the page lays out a single time.

use plotgrid_core::cell::{HOLDER_LABEL_CLASS, ROW_LABEL_CLASS, STATUS_LABEL_CLASS};
use plotgrid_core::{CellSink, CellView};
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, Element, HtmlElement};

use crate::error::{Result, UiError};

/// Look up one element, `None` when nothing matches.
///
/// # Errors
///
/// Returns [`UiError::InvalidSelector`] when the selector does not parse.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| UiError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{e:?}"),
        })
}

/// Console warning for cells rendered with the fallback status label.
#[must_use]
pub fn unknown_status_warning(cells: &[CellView]) -> Option<String> {
    let unknown = cells.iter().filter(|cell| cell.is_unknown()).count();
    (unknown > 0).then(|| format!("{unknown} plot(s) have an unknown status"))
}

/// Grid container backed by a live element.
#[derive(Debug, Clone)]
pub struct DomGrid {
    document: Document,
    container: Element,
}

impl DomGrid {
    pub const fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    #[must_use]
    pub const fn container(&self) -> &Element {
        &self.container
    }

    fn span(&self, class: &str, text: &str) -> Result<Element> {
        let span = self
            .document
            .create_element("span")
            .map_err(|e| UiError::dom("create span", &e))?;
        span.set_class_name(class);
        span.set_text_content(Some(text));
        Ok(span)
    }

    fn holder_span(&self, cell: &CellView) -> Result<Element> {
        let span = self.span(HOLDER_LABEL_CLASS, &cell.holder_label)?;
        span.dyn_ref::<HtmlElement>()
            .ok_or_else(|| UiError::Dom("holder span is not an HtmlElement".to_string()))?
            .style()
            .set_property("color", cell.holder_tone.css_color())
            .map_err(|e| UiError::dom("set holder color", &e))?;
        Ok(span)
    }

    /// Build one detached cell element.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when element creation fails.
    pub fn build_cell(&self, cell: &CellView) -> Result<Element> {
        let element = self
            .document
            .create_element("div")
            .map_err(|e| UiError::dom("create cell", &e))?;
        element.set_class_name(&cell.class_name());

        let row = self.span(ROW_LABEL_CLASS, &cell.row_label)?;
        let status = self.span(STATUS_LABEL_CLASS, &cell.status_label)?;
        let holder = self.holder_span(cell)?;
        for child in [&row, &status, &holder] {
            element
                .append_child(child)
                .map_err(|e| UiError::dom("append cell child", &e))?;
        }
        Ok(element)
    }

    fn build_fragment(&self, cells: &[CellView]) -> Result<DocumentFragment> {
        let fragment = self.document.create_document_fragment();
        for cell in cells {
            let element = self.build_cell(cell)?;
            fragment
                .append_child(&element)
                .map_err(|e| UiError::dom("append to fragment", &e))?;
        }
        Ok(fragment)
    }
}

impl CellSink for DomGrid {
    fn append_batch(&mut self, cells: &[CellView]) -> plotgrid_core::Result<()> {
        let fragment = self
            .build_fragment(cells)
            .map_err(|e| plotgrid_core::Error::append_failed(e.to_string()))?;
        self.container
            .append_child(&fragment)
            .map_err(|e| plotgrid_core::Error::append_failed(format!("{e:?}")))?;
        if let Some(warning) = unknown_status_warning(cells) {
            web_sys::console::warn_1(&warning.into());
        }
        Ok(())
    }
}
