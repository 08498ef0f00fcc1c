//! WASM entry point
//!
//! Trunk compiles this to WASM; it wires the host page on load.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    plotgrid_ui::start();
}
