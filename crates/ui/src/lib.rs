//! Leptos 0.7 CSR frontend for the plot grid page
//!
//! Compiled to WASM and loaded by the page. On a page that already has a
//! grid container and a primary action, it enhances them in place through
//! web-sys; otherwise it mounts the [`App`] component.
//!
//! ## Module Structure
//! - `boot`: page-load wiring of the grid and the feedback trigger
//! - `dom`: web-sys [`plotgrid_core::CellSink`] adapter
//! - `notify`: `window.alert` notifier and click listener
//! - `components`, `app`: Leptos rendering of the same cells
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod app;
pub mod boot;
pub mod components;
pub mod dom;
pub mod error;
pub mod notify;

pub use app::App;
pub use error::UiError;

use leptos::prelude::*;

/// Entry point: enhance the host page, or mount [`App`] when it has nothing to enhance.
pub fn start() {
    match boot::current_document() {
        Ok(document) => {
            if boot::boot(&document).nothing_found() {
                web_sys::console::log_1(&"No grid or trigger on page, mounting app".into());
                mount_to_body(|| view! { <App /> });
            }
        }
        Err(e) => web_sys::console::error_1(&format!("Plot grid start failed: {e}").into()),
    }
}
