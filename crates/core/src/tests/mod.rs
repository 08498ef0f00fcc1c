//! Behavioral tests for the plot grid core
//!
//! BDD-style tests using given-when-then naming. Tests describe what a
//! page visitor would see rather than how the mapping is implemented.
