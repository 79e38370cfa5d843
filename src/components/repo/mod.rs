//! Live repository browser.
//!
//! - [`RepoBrowser`] - Header, download links and the tree of one repository
//! - [`tree`] - Recursive folder rows
//! - [`code_panel`] - Shared file viewer

mod browser;
pub mod code_panel;
pub mod tree;

pub use browser::RepoBrowser;

use std::sync::Arc;

use leptos::prelude::RwSignal;
use studyhub_core::{CodeViewer, RepoSource, RepoTree};

/// State shared by every row of one browser view.
#[derive(Clone)]
pub struct BrowserContext {
    pub source: &'static RepoSource,
    pub tree: Arc<RepoTree>,
    pub viewer: RwSignal<CodeViewer>,
}
