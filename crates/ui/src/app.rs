//! Standalone application component
//!
//! Used when the host page does not ship its own grid container or
//! trigger: the whole page is rendered by Leptos from the sample rows.

use leptos::prelude::*;
use plotgrid_core::{PageConfig, PlotSource, SamplePlots, build_cells};

use crate::components::{FeedbackButton, PlotGrid};

/// Root component
#[component]
pub fn App() -> impl IntoView {
    let config = PageConfig::default();
    let cells = SamplePlots
        .rows()
        .and_then(|rows| build_cells(&rows, &config.cell_options()));

    let grid = match cells {
        Ok(cells) => view! { <PlotGrid cells=cells /> }.into_any(),
        Err(e) => {
            web_sys::console::error_1(&format!("Plot grid failed: {e}").into());
            view! { <p class="grid-error">{e.to_string()}</p> }.into_any()
        }
    };

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Mapa de parcelas"</h1>
            </header>
            <main class="app-main">{grid}</main>
            <footer class="app-footer">
                <FeedbackButton message=config.feedback_message label="Quiero reservar" />
            </footer>
        </div>
    }
}
