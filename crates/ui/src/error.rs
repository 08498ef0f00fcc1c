//! Error types for the browser shell
//!
//! DOM failures arrive as opaque `JsValue`s; they are rendered with `{:?}`
//! into the message so nothing JS-typed leaks out of this crate.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while wiring the page
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// Not running in a browser window
    #[error("No window object available")]
    NoWindow,
    /// Window has no document
    #[error("No document object available")]
    NoDocument,
    /// Selector rejected by `querySelector`
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
    /// Any other DOM call failed
    #[error("DOM operation failed: {0}")]
    Dom(String),
    /// Error from the core mapping or one of its seams
    #[error(transparent)]
    Core(#[from] plotgrid_core::Error),
}

impl UiError {
    /// Wrap a failed DOM call.
    pub fn dom(context: &str, value: &JsValue) -> Self {
        Self::Dom(format!("{context}: {value:?}"))
    }
}

/// Result type alias for browser shell operations
pub type Result<T> = std::result::Result<T, UiError>;
