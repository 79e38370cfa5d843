//! Core logic of the study hub.
//!
//! Everything here is independent of the browser: the web crate drives these
//! types from its event handlers and renders what they describe.
//!
//! - [`navigator`] - View-state stack and guarded loads
//! - [`tree`] / [`expansion`] - Repository tree index and folder rows
//! - [`code_viewer`] - Shared file viewer panel
//! - [`embed`] / [`links`] - Where clicked targets open
//! - [`document`] / [`templates`] - Module markup in and out
//! - [`memo`] / [`store`] - Session memoization of the snapshot document
//! - [`actions`] - What finished user actions do to the stack

pub mod actions;
pub mod catalog;
pub mod code_viewer;
pub mod document;
pub mod embed;
pub mod error;
pub mod expansion;
pub mod format;
pub mod links;
pub mod memo;
pub mod models;
pub mod navigator;
pub mod request;
pub mod store;
pub mod templates;
pub mod tree;

pub use actions::{MODULE_LOAD_FAILED, apply_embed_decision, module_outcome};
pub use catalog::{Course, HomeUpdate, NavEntry, NavTarget, Notebook, RepoSource};
pub use code_viewer::{CodePanel, CodeViewer};
pub use document::{ModuleDocument, extract_module};
pub use embed::{EmbedDecision, EmbedPolicy};
pub use error::{FetchError, HubError};
pub use expansion::FolderExpansion;
pub use format::FileKind;
pub use links::{ActionMarker, AnchorInfo, LinkAction, ViewerAction, classify_anchor};
pub use memo::MemoizedLoader;
pub use models::{EntryKind, FileEntry, ModuleContent, RepoSnapshot, ReposDocument, ViewState};
pub use navigator::{EmbedFrame, Navigator, Screen};
pub use request::{RequestGuard, RequestToken};
pub use store::RepoStore;
pub use tree::{RepoTree, TreeEntry, TreeView};
