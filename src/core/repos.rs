//! Repository snapshot store.
//!
//! The snapshot document is fetched once per session; trees are indexed once
//! per repository and shared by every browser view that shows it. Views only
//! read the recorded outcome of the last open.

use std::sync::Arc;

use studyhub_core::{HubError, RepoSource, RepoStore, RepoTree, ReposDocument};

use crate::config::SNAPSHOT_URL;
use crate::utils::{fetch_json, fetch_text};

thread_local! {
    static STORE: RepoStore = RepoStore::new();
}

/// Open a repository, fetching the snapshot document if needed.
pub async fn load_tree(repo_id: &str) -> Result<Arc<RepoTree>, HubError> {
    let store = STORE.with(RepoStore::clone);
    store
        .open(repo_id, || async {
            tracing::info!(url = SNAPSHOT_URL, "fetching repository snapshots");
            Ok(fetch_json::<ReposDocument>(SNAPSHOT_URL).await?)
        })
        .await
}

/// Outcome of the last [`load_tree`] for `repo_id`, without loading.
pub fn tree_outcome(repo_id: &str) -> Option<Result<Arc<RepoTree>, HubError>> {
    STORE.with(|store| store.outcome(repo_id))
}

/// Raw text of a file listed in `tree`.
pub async fn load_file(source: &RepoSource, tree: &RepoTree, path: &str) -> Result<String, HubError> {
    let entry = tree.file(path)?;
    let url = source.raw_url(&entry.path)?;
    tracing::debug!(%url, "fetching file");
    Ok(fetch_text(&url).await?)
}
