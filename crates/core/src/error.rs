//! Core error types for plot grid operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for plot grid operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Rendering errors
    #[error("plot '{plot_id}' has unknown status '{value}'")]
    UnknownStatus { plot_id: String, value: String },

    #[error("failed to append cells to container: {reason}")]
    AppendFailed { reason: String },

    #[error("failed to show notification: {reason}")]
    NotifyFailed { reason: String },

    #[error("failed to attach click handler: {reason}")]
    AttachFailed { reason: String },

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },
}

impl Error {
    /// Create an unknown status error.
    pub fn unknown_status(plot_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownStatus {
            plot_id: plot_id.into(),
            value: value.into(),
        }
    }

    /// Create an append failure.
    pub fn append_failed(reason: impl Into<String>) -> Self {
        Self::AppendFailed {
            reason: reason.into(),
        }
    }

    /// Create a notification failure.
    pub fn notify_failed(reason: impl Into<String>) -> Self {
        Self::NotifyFailed {
            reason: reason.into(),
        }
    }

    /// Create a handler attachment failure.
    pub fn attach_failed(reason: impl Into<String>) -> Self {
        Self::AttachFailed {
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::json_parse_failed(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::toml_parse_failed(err.to_string())
    }
}
