//! Core types for the plot grid page.
//!
//! Everything here is pure and DOM-free: the plot data model, status labels,
//! the mapping from plots to cell descriptions, and the seams
//! ([`PlotSource`], [`CellSink`], [`Notifier`]) the browser shell plugs into.
//!
//! ## Module Structure
//! - `status`, `plot`: data model
//! - `labels`: status display strings and unknown-status policy
//! - `cell`: plot to [`CellView`] mapping
//! - `source`: data providers
//! - `render`: [`GridRenderer`] and the [`CellSink`] adapter trait
//! - `notifier`: [`FeedbackNotifier`]
//! - `config`: [`PageConfig`]
//! - `error`, `result`: error types and combinators

#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod error;
pub mod labels;
pub mod notifier;
pub mod plot;
pub mod render;
pub mod result;
pub mod source;
pub mod status;
pub mod wiring;

pub use cell::{CellOptions, CellView, HolderTone, build_cell, build_cells};
pub use config::PageConfig;
pub use error::Error;
pub use labels::{StatusLabels, UnknownStatusPolicy};
pub use notifier::{DEFAULT_FEEDBACK_MESSAGE, FeedbackNotifier, Notifier};
pub use plot::{Plot, PlotRow};
pub use render::{CellSink, GridRenderer, VecSink};
pub use result::{Result, ResultExt};
pub use source::{JsonPlots, PlotSource, SamplePlots, StaticPlots, sample_rows};
pub use status::PlotStatus;
pub use wiring::Wiring;

#[cfg(test)]
mod tests;
