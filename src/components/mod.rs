//! UI components built with Leptos.
//!
//! - [`Shell`] - Page layout and global key/click handling (main entry point)
//! - [`appbar`] - Back button, theme toggle and navigation menu
//! - [`viewer`] - Content region rendered from the navigation stack
//! - [`home`] - Landing view
//! - [`repo`] - Live repository browser with folder tree and code viewer
//! - [`embed`] - External resource overlay
//! - [`toast`] - Transient messages
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod appbar;
pub mod embed;
pub mod home;
pub mod icons;
pub mod repo;
pub mod shell;
pub mod toast;
pub mod viewer;

pub use shell::Shell;
