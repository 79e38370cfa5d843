//! Data models for the hub.
//!
//! - [`ReposDocument`], [`RepoSnapshot`], [`FileEntry`] - Repository listings
//! - [`ViewState`], [`ModuleContent`] - Navigation stack entries

mod snapshot;
mod view;

pub use snapshot::{EntryKind, FileEntry, RepoRecord, RepoSnapshot, ReposDocument};
pub use view::{ModuleContent, ViewState};
