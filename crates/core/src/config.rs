//! Page configuration.
//!
//! Every field has a default, so an empty document yields the stock page:
//! `#grid` container, `.btn-primary` trigger, Spanish labels.

use serde::{Deserialize, Serialize};

use crate::cell::{CellOptions, DEFAULT_HOLDER_PLACEHOLDER};
use crate::labels::{StatusLabels, UnknownStatusPolicy};
use crate::notifier::DEFAULT_FEEDBACK_MESSAGE;
use crate::error::Error;
use crate::result::{Result, ResultExt};

/// Settings for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Selector of the grid container.
    #[serde(default = "default_grid_selector")]
    pub grid_selector: String,

    /// Selector of the feedback trigger.
    #[serde(default = "default_trigger_selector")]
    pub trigger_selector: String,

    /// Message shown when the trigger is clicked.
    #[serde(default = "default_feedback_message")]
    pub feedback_message: String,

    /// Holder text for plots without a holder.
    #[serde(default = "default_holder_placeholder")]
    pub holder_placeholder: String,

    /// Handling of statuses without a label.
    #[serde(default)]
    pub unknown_status: UnknownStatusPolicy,

    #[serde(default)]
    pub labels: StatusLabels,
}

fn default_grid_selector() -> String {
    "#grid".to_string()
}

fn default_trigger_selector() -> String {
    ".btn-primary".to_string()
}

fn default_feedback_message() -> String {
    DEFAULT_FEEDBACK_MESSAGE.to_string()
}

fn default_holder_placeholder() -> String {
    DEFAULT_HOLDER_PLACEHOLDER.to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            grid_selector: default_grid_selector(),
            trigger_selector: default_trigger_selector(),
            feedback_message: default_feedback_message(),
            holder_placeholder: default_holder_placeholder(),
            unknown_status: UnknownStatusPolicy::default(),
            labels: StatusLabels::default(),
        }
    }
}

impl PageConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TomlParseFailed`] on malformed input.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::JsonParseFailed`] on malformed input.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse a TOML document, falling back to the defaults when it is malformed.
    ///
    /// `on_error` sees the parse error before the defaults are taken.
    pub fn from_toml_or_default<F: FnOnce(&Error)>(raw: &str, on_error: F) -> Self {
        Self::from_toml_str(raw)
            .inspect_error(on_error)
            .or_default_logged(Self::default())
    }

    /// Set the unknown status policy.
    #[must_use]
    pub const fn unknown_status(mut self, policy: UnknownStatusPolicy) -> Self {
        self.unknown_status = policy;
        self
    }

    /// Options for the cell mapping.
    #[must_use]
    pub fn cell_options(&self) -> CellOptions {
        CellOptions {
            labels: self.labels.clone(),
            holder_placeholder: self.holder_placeholder.clone(),
            unknown_status: self.unknown_status,
        }
    }
}
