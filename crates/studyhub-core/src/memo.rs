//! Session-lifetime memoization of a single asynchronous load.
//!
//! The first caller starts the load; callers arriving while it is in
//! flight await the same future. A success is kept for the rest of the
//! session. A failure is handed to everyone waiting on it and then
//! forgotten, so the next call starts a fresh load.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::HubError;

type SharedLoad<T> = Shared<LocalBoxFuture<'static, Result<Arc<T>, HubError>>>;

/// Memoized single-value loader for single-threaded runtimes.
pub struct MemoizedLoader<T> {
    slot: Rc<RefCell<Option<SharedLoad<T>>>>,
}

impl<T> Clone for MemoizedLoader<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for MemoizedLoader<T> {
    fn default() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }
}

impl<T: 'static> MemoizedLoader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized value, running `load` only if nothing is cached
    /// or in flight.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<T>, HubError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, HubError>> + 'static,
    {
        let shared = {
            let mut slot = self.slot.borrow_mut();
            match slot.as_ref() {
                Some(existing) => existing.clone(),
                None => {
                    let fresh = load().map(|r| r.map(Arc::new)).boxed_local().shared();
                    *slot = Some(fresh.clone());
                    fresh
                }
            }
        };

        let result = shared.clone().await;
        if let Err(e) = &result {
            let mut slot = self.slot.borrow_mut();
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&shared)) {
                tracing::warn!(error = %e, "load failed; will retry on next request");
                *slot = None;
            }
        }
        result
    }

    /// Value of a completed successful load, without starting one.
    pub fn peek(&self) -> Option<Arc<T>> {
        self.slot
            .borrow()
            .as_ref()
            .and_then(|shared| shared.peek())
            .and_then(|result| result.as_ref().ok().cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::FetchError;

    #[tokio::test]
    async fn test_success_is_memoized() {
        let loader = MemoizedLoader::<u32>::new();
        let calls = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let calls = calls.clone();
            let value = loader
                .get_or_load(move || async move {
                    calls.set(calls.get() + 1);
                    Ok::<_, HubError>(7)
                })
                .await
                .unwrap();
            assert_eq!(*value, 7);
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(loader.peek().as_deref(), Some(&7));
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_load() {
        let loader = MemoizedLoader::<String>::new();
        let calls = Rc::new(Cell::new(0));

        let make = |calls: Rc<Cell<usize>>| {
            move || async move {
                calls.set(calls.get() + 1);
                tokio::task::yield_now().await;
                Ok::<_, HubError>("snapshot".to_string())
            }
        };

        let (a, b) = tokio::join!(
            loader.get_or_load(make(calls.clone())),
            loader.get_or_load(make(calls.clone()))
        );

        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    }

    #[tokio::test]
    async fn test_failure_is_not_memoized() {
        let loader = MemoizedLoader::<u32>::new();

        let err = loader
            .get_or_load(|| async { Err::<u32, HubError>(FetchError::HttpError(503).into()) })
            .await
            .unwrap_err();
        assert_eq!(err, HubError::Fetch(FetchError::HttpError(503)));
        assert!(loader.peek().is_none());

        let value = loader.get_or_load(|| async { Ok::<_, HubError>(1) }).await.unwrap();
        assert_eq!(*value, 1);
    }

    #[tokio::test]
    async fn test_waiters_of_failed_load_all_see_error() {
        let loader = MemoizedLoader::<u32>::new();

        let failing = || async {
            tokio::task::yield_now().await;
            Err::<u32, _>(HubError::Unavailable("offline".to_string()))
        };

        let (a, b) = tokio::join!(loader.get_or_load(failing), loader.get_or_load(failing));
        assert!(a.is_err());
        assert!(b.is_err());

        let value = loader.get_or_load(|| async { Ok::<_, HubError>(2) }).await.unwrap();
        assert_eq!(*value, 2);
    }
}
