//! Repository trees for the session.
//!
//! Opening a repository is the only thing that loads. The outcome of the
//! last open, success or failure, is kept per repository so views can
//! render it without touching the network. A failed open is retried only
//! when the user opens that repository again.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::HubError;
use crate::memo::MemoizedLoader;
use crate::models::ReposDocument;
use crate::tree::RepoTree;

type Outcome = Result<Arc<RepoTree>, HubError>;

/// Snapshot document loader plus the per-repository open outcomes.
#[derive(Clone, Default)]
pub struct RepoStore {
    document: MemoizedLoader<ReposDocument>,
    outcomes: Rc<RefCell<HashMap<String, Outcome>>>,
}

impl RepoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `repo_id`, loading the snapshot document if needed.
    ///
    /// An already indexed tree is returned as is. Otherwise the document is
    /// loaded through `load_document` (shared with concurrent callers) and
    /// the result is recorded.
    pub async fn open<F, Fut>(&self, repo_id: &str, load_document: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ReposDocument, HubError>> + 'static,
    {
        if let Some(Ok(tree)) = self.outcome(repo_id) {
            return Ok(tree);
        }

        let outcome = match self.document.get_or_load(load_document).await {
            Ok(document) => document.snapshot(repo_id).map(|snapshot| {
                let tree = Arc::new(RepoTree::from_snapshot(&snapshot));
                tracing::debug!(repo = repo_id, nodes = tree.len(), "indexed repository tree");
                tree
            }),
            Err(e) => Err(e),
        };

        self.outcomes
            .borrow_mut()
            .insert(repo_id.to_string(), outcome.clone());
        outcome
    }

    /// Outcome of the last open of `repo_id`, if any. Never loads.
    pub fn outcome(&self, repo_id: &str) -> Option<Outcome> {
        self.outcomes.borrow().get(repo_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::error::FetchError;
    use crate::models::{FileEntry, RepoRecord};

    fn document() -> ReposDocument {
        let record = RepoRecord {
            pushed_at: Utc.with_ymd_and_hms(2025, 1, 14, 9, 30, 0).unwrap(),
            files: vec![FileEntry::file("src/app.js", 120), FileEntry::file("README.md", 40)],
        };
        ReposDocument {
            repos: HashMap::from([("dwec-arrays".to_string(), record)]),
        }
    }

    #[tokio::test]
    async fn test_failed_open_is_not_retried_by_reading() {
        let store = RepoStore::new();
        let fetches = Rc::new(Cell::new(0));

        let counter = Rc::clone(&fetches);
        let result = store
            .open("dwec-arrays", move || async move {
                counter.set(counter.get() + 1);
                Err::<ReposDocument, _>(HubError::Fetch(FetchError::HttpError(403)))
            })
            .await;
        assert!(result.is_err());

        // The browser view reads the outcome; it must not fetch again.
        assert!(matches!(store.outcome("dwec-arrays"), Some(Err(e)) if e.is_rate_limited()));
        assert!(matches!(store.outcome("dwec-arrays"), Some(Err(_))));
        assert_eq!(fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_reopening_after_failure_loads_again() {
        let store = RepoStore::new();
        let fetches = Rc::new(Cell::new(0));

        let counter = Rc::clone(&fetches);
        let first = store
            .open("dwec-arrays", move || async move {
                counter.set(counter.get() + 1);
                Err::<ReposDocument, _>(HubError::Fetch(FetchError::Timeout))
            })
            .await;
        assert!(first.is_err());

        let counter = Rc::clone(&fetches);
        let second = store
            .open("dwec-arrays", move || async move {
                counter.set(counter.get() + 1);
                Ok::<_, HubError>(document())
            })
            .await;

        assert_eq!(fetches.get(), 2);
        assert_eq!(second.unwrap().top_level().len(), 2);
        assert!(matches!(store.outcome("dwec-arrays"), Some(Ok(_))));
    }

    #[tokio::test]
    async fn test_indexed_tree_is_reused() {
        let store = RepoStore::new();
        let fetches = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let counter = Rc::clone(&fetches);
            let tree = store
                .open("dwec-arrays", move || async move {
                    counter.set(counter.get() + 1);
                    Ok::<_, HubError>(document())
                })
                .await;
            assert!(tree.is_ok());
        }

        assert_eq!(fetches.get(), 1);
        let a = store.outcome("dwec-arrays").unwrap().unwrap();
        let b = store.outcome("dwec-arrays").unwrap().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn test_unknown_repository_is_recorded() {
        let store = RepoStore::new();
        let result = store
            .open("missing", || async { Ok::<_, HubError>(document()) })
            .await;

        assert!(result.is_err());
        assert!(matches!(store.outcome("missing"), Some(Err(_))));
        assert!(store.outcome("dwec-arrays").is_none());
    }
}
