//! Initialization state shared by the page components

use std::fmt;

/// Whether a component attached itself to the page at init.
///
/// The only transition is `NotWired -> Wired`, taken once. A component
/// whose target element is absent stays `NotWired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wiring {
    #[default]
    NotWired,
    Wired,
}

impl Wiring {
    #[must_use]
    pub const fn is_wired(self) -> bool {
        matches!(self, Self::Wired)
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotWired => write!(f, "not wired"),
            Self::Wired => write!(f, "wired"),
        }
    }
}
