//! Result type definition and extension traits.
//!
//! Provides combinators for falling back on defaults without unwrap/expect.

use crate::error::Error;

/// The standard Result type for plot grid operations.
///
/// # Examples
///
/// ```
/// use plotgrid_core::{PageConfig, Result};
///
/// fn load(raw: &str) -> Result<String> {
///     let config = PageConfig::from_toml_str(raw)?;
///     Ok(config.grid_selector)
/// }
///
/// assert_eq!(load("").ok().as_deref(), Some("#grid"));
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logged fallbacks for Results.
pub trait ResultExt<T> {
    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;

    /// Get the value or compute a fallback, logging the error if present.
    fn or_else_logged<F: FnOnce() -> T>(self, fallback: F) -> T;

    /// Inspect the error without consuming the Result.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_default_logged(self, default: T) -> T {
        self.or_else_logged(|| default)
    }

    fn or_else_logged<F: FnOnce() -> T>(self, fallback: F) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                fallback()
            }
        }
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}
