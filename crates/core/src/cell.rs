//! Pure mapping from plot records to cell descriptions.
//!
//! Nothing here touches the DOM. A [`CellView`] carries everything an
//! adapter needs to build one grid cell: the two classification tags, the
//! three text fields in display order, and the holder emphasis.

use serde::Serialize;

use crate::error::Error;
use crate::labels::{StatusLabels, UNKNOWN_STATUS_LABEL, UnknownStatusPolicy};
use crate::plot::{Plot, PlotRow};
use crate::result::Result;
use crate::status::PlotStatus;

/// Generic tag carried by every cell.
pub const CELL_CLASS: &str = "cell";
/// Class of the row label span.
pub const ROW_LABEL_CLASS: &str = "cell__row";
/// Class of the status label span.
pub const STATUS_LABEL_CLASS: &str = "cell__status";
/// Class of the holder label span.
pub const HOLDER_LABEL_CLASS: &str = "cell__holder";
/// Text shown when a plot has no holder.
pub const DEFAULT_HOLDER_PLACEHOLDER: &str = "Disponible para asignar";
/// Separator between row name and plot id.
pub const ROW_LABEL_SEPARATOR: &str = " · ";

/// Modifier tag of cells whose status has no label.
pub const UNKNOWN_MODIFIER: &str = "cell--unknown";

/// Emphasis applied to the holder label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HolderTone {
    /// A holder is assigned.
    Muted,
    /// No holder, the placeholder is shown.
    Accent,
}

impl HolderTone {
    /// Inline `color` value, resolved by the page stylesheet's custom properties.
    #[must_use]
    pub const fn css_color(self) -> &'static str {
        match self {
            Self::Muted => "var(--text-muted)",
            Self::Accent => "var(--accent)",
        }
    }
}

/// Description of one rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// `[CELL_CLASS, "cell--<status>"]`
    pub classes: [String; 2],
    pub row_label: String,
    pub status_label: String,
    pub holder_label: String,
    pub holder_tone: HolderTone,
}

impl CellView {
    /// Space separated class attribute value.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Whether the cell was rendered with the fallback status label.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.classes.iter().any(|class| class == UNKNOWN_MODIFIER)
    }
}

/// Settings shared by every cell of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOptions {
    pub labels: StatusLabels,
    pub holder_placeholder: String,
    pub unknown_status: UnknownStatusPolicy,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            labels: StatusLabels::default(),
            holder_placeholder: DEFAULT_HOLDER_PLACEHOLDER.to_string(),
            unknown_status: UnknownStatusPolicy::default(),
        }
    }
}

/// Status modifier tag, e.g. `cell--reserved`.
///
/// Unrecognized values map to `cell--unknown` so arbitrary input never
/// becomes a class token.
#[must_use]
pub fn status_modifier(status: &PlotStatus) -> String {
    if status.is_known() {
        format!("{CELL_CLASS}--{}", status.as_str())
    } else {
        UNKNOWN_MODIFIER.to_string()
    }
}

/// Row label text, `"<row> · <plot id>"`.
#[must_use]
pub fn row_label(row: &str, plot_id: &str) -> String {
    format!("{row}{ROW_LABEL_SEPARATOR}{plot_id}")
}

/// Holder text and tone.
///
/// A present holder is shown verbatim, even when empty; only a non-empty
/// holder is muted.
fn holder_label(holder: Option<&str>, placeholder: &str) -> (String, HolderTone) {
    let text = holder.unwrap_or(placeholder).to_string();
    let tone = match holder {
        Some(name) if !name.is_empty() => HolderTone::Muted,
        _ => HolderTone::Accent,
    };
    (text, tone)
}

fn status_label(plot: &Plot, options: &CellOptions) -> Result<String> {
    match (options.labels.get(&plot.status), options.unknown_status) {
        (Some(label), _) => Ok(label.to_string()),
        (None, UnknownStatusPolicy::FailFast) => {
            Err(Error::unknown_status(&plot.id, plot.status.as_str()))
        }
        (None, UnknownStatusPolicy::Fallback) => {
            tracing::warn!(
                plot_id = %plot.id,
                status = %plot.status,
                "Unknown plot status, using fallback label"
            );
            Ok(UNKNOWN_STATUS_LABEL.to_string())
        }
    }
}

/// Build the description of a single cell.
///
/// # Errors
///
/// Returns [`Error::UnknownStatus`] when the status has no label and the
/// policy is [`UnknownStatusPolicy::FailFast`].
pub fn build_cell(row: &PlotRow, plot: &Plot, options: &CellOptions) -> Result<CellView> {
    let status_label = status_label(plot, options)?;
    let (holder_label, holder_tone) =
        holder_label(plot.holder.as_deref(), &options.holder_placeholder);

    Ok(CellView {
        classes: [CELL_CLASS.to_string(), status_modifier(&plot.status)],
        row_label: row_label(&row.row, &plot.id),
        status_label,
        holder_label,
        holder_tone,
    })
}

/// Build every cell in row-major, plot order.
///
/// # Errors
///
/// Stops at the first cell that fails [`build_cell`].
pub fn build_cells(rows: &[PlotRow], options: &CellOptions) -> Result<Vec<CellView>> {
    rows.iter()
        .flat_map(|row| row.plots.iter().map(move |plot| (row, plot)))
        .map(|(row, plot)| build_cell(row, plot, options))
        .collect()
}
