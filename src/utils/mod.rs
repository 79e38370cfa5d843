//! Browser utilities.
//!
//! Provides:
//! - [`fetch_text`], [`fetch_json`] - Network fetching with timeout
//! - [`dom`] - Window, storage and click-target helpers
//! - [`logging`] - Tracing subscriber writing to the console
//! - [`theme`] - Light/dark preference

pub mod dom;
mod fetch;
pub mod logging;
pub mod theme;

pub use fetch::{fetch_json, fetch_text};
pub use theme::Theme;
