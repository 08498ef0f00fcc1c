//! Leptos components for hosts that render the whole page
//!
//! These render the same [`CellView`]s as the DOM adapter, so the markup
//! and classes match a server-provided page.

use leptos::prelude::*;
use plotgrid_core::cell::{HOLDER_LABEL_CLASS, ROW_LABEL_CLASS, STATUS_LABEL_CLASS};
use plotgrid_core::{CellView, FeedbackNotifier};

use crate::notify::{AlertNotifier, handle_click};

/// One grid cell
#[component]
pub fn PlotCell(cell: CellView) -> impl IntoView {
    let class_name = cell.class_name();
    let holder_style = format!("color: {}", cell.holder_tone.css_color());
    let CellView {
        row_label,
        status_label,
        holder_label,
        ..
    } = cell;

    view! {
        <div class=class_name>
            <span class=ROW_LABEL_CLASS>{row_label}</span>
            <span class=STATUS_LABEL_CLASS>{status_label}</span>
            <span class=HOLDER_LABEL_CLASS style=holder_style>{holder_label}</span>
        </div>
    }
}

/// Grid container with one [`PlotCell`] per description, in order
#[component]
pub fn PlotGrid(cells: Vec<CellView>) -> impl IntoView {
    view! {
        <div id="grid" class="grid">
            {cells
                .into_iter()
                .map(|cell| view! { <PlotCell cell=cell /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Primary action that shows the feedback message on every click
#[component]
pub fn FeedbackButton(message: String, #[prop(into)] label: String) -> impl IntoView {
    let feedback = FeedbackNotifier::new(AlertNotifier, message);

    view! {
        <button class="btn-primary" on:click=move |_| handle_click(&feedback)>
            {label}
        </button>
    }
}
