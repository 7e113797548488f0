//! Thread-safe handle to a clipboard facade
//!
//! One coarse lock around the whole facade: count, active index and entry
//! slots change together, so reads need exclusivity as much as writes.
//! Borrowed query results are only available inside `with_query`, which
//! keeps them from outliving the lock.

use parking_lot::Mutex;
use std::sync::Arc;

use super::facade::{ChangeOutcome, ClipboardBackend, ClipboardFacade};
use super::query::QueryEngine;
use super::types::{EntryId, Stats};
use crate::error::Result;

/// Cloneable, shareable clipboard history (e.g. UI thread + monitor thread)
///
/// `Send + Sync` whenever the backend is `Send`.
pub struct SharedHistory<B: ClipboardBackend> {
    inner: Arc<Mutex<ClipboardFacade<B>>>,
}

impl<B: ClipboardBackend> Clone for SharedHistory<B> {
    fn clone(&self) -> Self {
        SharedHistory {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: ClipboardBackend> SharedHistory<B> {
    pub fn new(facade: ClipboardFacade<B>) -> Self {
        SharedHistory {
            inner: Arc::new(Mutex::new(facade)),
        }
    }

    pub fn on_external_change(&self) -> ChangeOutcome {
        self.inner.lock().on_external_change()
    }

    pub fn restore(&self, index: usize) -> Result<()> {
        self.inner.lock().restore(index)
    }

    pub fn record_text(&self, text: &str) -> Result<EntryId> {
        self.inner.lock().record_text(text)
    }

    pub fn clear(&self) {
        self.inner.lock().store_mut().clear();
    }

    pub fn active_text(&self) -> Option<String> {
        self.inner.lock().store().active_text()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().store().is_empty()
    }

    pub fn stats(&self) -> Stats {
        self.inner.lock().query().stats()
    }

    pub fn start_monitoring(&self) {
        self.inner.lock().start_monitoring();
    }

    pub fn stop_monitoring(&self) {
        self.inner.lock().stop_monitoring();
    }

    pub fn is_monitoring(&self) -> bool {
        self.inner.lock().is_monitoring()
    }

    /// Run `f` against a query view while holding the lock
    pub fn with_query<R>(&self, f: impl FnOnce(QueryEngine<'_>) -> R) -> R {
        let facade = self.inner.lock();
        f(facade.query())
    }

    /// Run `f` with exclusive access to the facade
    pub fn with_facade<R>(&self, f: impl FnOnce(&mut ClipboardFacade<B>) -> R) -> R {
        let mut facade = self.inner.lock();
        f(&mut facade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard_history::test_support::FakeClipboard;
    use crate::clipboard_history::ContentType;
    use std::thread;

    fn shared() -> SharedHistory<FakeClipboard> {
        SharedHistory::new(ClipboardFacade::new(FakeClipboard::default()))
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shared_history_is_send_and_sync_for_send_backend() {
        assert_send_sync::<SharedHistory<FakeClipboard>>();
    }

    #[test]
    fn test_clones_share_one_history() {
        let history = shared();
        let other = history.clone();

        history.record_text("from one handle").unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other.active_text().as_deref(), Some("from one handle"));
    }

    #[test]
    fn test_concurrent_inserts_respect_capacity() {
        let history = shared();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let history = history.clone();
                thread::spawn(move || {
                    for i in 0..40 {
                        let _ = history.record_text(&format!("thread {} item {}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(history.len(), 100);
        history.with_facade(|facade| {
            let store = facade.store();
            assert_eq!(store.current_index(), store.len() - 1);
        });
    }

    #[test]
    fn test_with_query_borrows_under_lock() {
        let history = shared();
        for text in ["one", "two", "three"] {
            history.record_text(text).unwrap();
        }
        let newest: Vec<String> =
            history.with_query(|q| q.recent(2).iter().map(|e| e.to_text()).collect());
        assert_eq!(newest, vec!["three", "two"]);

        let text_count = history.with_query(|q| q.filter_by_type(ContentType::Text).len());
        assert_eq!(text_count, 3);
    }

    #[test]
    fn test_external_change_and_restore_through_shared_handle() {
        let history = shared();
        history.with_facade(|facade| facade.backend_mut().set_content("copied elsewhere"));

        let outcome = history.on_external_change();
        assert!(matches!(outcome, ChangeOutcome::Recorded(_)));
        history.record_text("typed in app").unwrap();

        history.restore(0).unwrap();
        assert_eq!(history.active_text().as_deref(), Some("copied elsewhere"));
        history.with_facade(|facade| {
            assert_eq!(facade.backend().written(), vec![b"copied elsewhere".to_vec()]);
        });
    }

    #[test]
    fn test_clear_and_monitoring_through_shared_handle() {
        let history = shared();
        history.record_text("a").unwrap();
        history.start_monitoring();
        assert!(history.is_monitoring());

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.stats(), Stats::default());

        history.stop_monitoring();
        assert!(!history.is_monitoring());
    }
}
