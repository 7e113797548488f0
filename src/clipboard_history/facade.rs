//! Clipboard facade
//!
//! Ties the system clipboard to the history store: external changes are
//! classified and recorded, restores write an entry back out.

use tracing::{debug, info, warn};

use super::classifier;
use super::query::QueryEngine;
use super::store::HistoryStore;
use super::types::{ContentType, EntryId};
use crate::error::{HistoryError, RejectReason, Result};

/// Source label for entries recorded through [`ClipboardFacade::record_text`]
pub const API_SOURCE: &str = "api";

/// Access to the operating system clipboard.
///
/// Implemented by the platform layer (see `SystemClipboard`) and by fakes
/// in tests.
pub trait ClipboardBackend {
    /// Current plain-text clipboard content, None when empty or unsupported
    fn read(&mut self) -> Option<Vec<u8>>;

    /// Replace the clipboard content. Returns false on failure.
    fn write(&mut self, content: &[u8]) -> bool;

    /// Application that owns the current clipboard content, if known
    fn source_app(&self) -> Option<String> {
        None
    }
}

/// What happened to an external clipboard change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Recorded as a new history entry
    Recorded(EntryId),
    /// Not recorded because the store refused it
    Skipped(RejectReason),
    /// The clipboard had nothing readable
    NoContent,
}

/// Orchestrates clipboard reads/writes around a `HistoryStore`
#[derive(Debug)]
pub struct ClipboardFacade<B: ClipboardBackend> {
    store: HistoryStore,
    backend: B,
    monitoring: bool,
}

impl<B: ClipboardBackend> ClipboardFacade<B> {
    /// Facade over a fresh store with default limits
    pub fn new(backend: B) -> Self {
        Self::with_store(HistoryStore::new(), backend)
    }

    pub fn with_store(store: HistoryStore, backend: B) -> Self {
        ClipboardFacade {
            store,
            backend,
            monitoring: false,
        }
    }

    /// Record the current clipboard content after an external change.
    ///
    /// Insertion failures are not errors here: the change is simply not
    /// recorded and the outcome says why.
    pub fn on_external_change(&mut self) -> ChangeOutcome {
        let Some(content) = self.backend.read() else {
            debug!("Clipboard change with no readable content");
            return ChangeOutcome::NoContent;
        };

        let content_type = classifier::classify(&content);
        let source_app = self.backend.source_app();

        match self
            .store
            .insert(&content, content_type, source_app.as_deref())
        {
            Ok(id) => ChangeOutcome::Recorded(id),
            Err(HistoryError::Rejected(reason)) => {
                warn!(
                    reason = %reason,
                    content_size = content.len(),
                    "Clipboard change not recorded"
                );
                ChangeOutcome::Skipped(reason)
            }
            Err(e) => {
                // insert only ever rejects
                warn!(error = %e, "Clipboard change not recorded");
                ChangeOutcome::NoContent
            }
        }
    }

    /// Write the entry at `index` back to the system clipboard and make it
    /// the active entry.
    ///
    /// # Errors
    /// - `NotFound` if there is no entry at `index`
    /// - `WriteFailed` if the system clipboard refused the write; the active
    ///   entry is left unchanged
    pub fn restore(&mut self, index: usize) -> Result<()> {
        let entry = self
            .store
            .get(index)
            .ok_or(HistoryError::NotFound { index })?;

        if !self.backend.write(entry.content()) {
            warn!(index, entry_id = %entry.id(), "System clipboard write failed");
            return Err(HistoryError::WriteFailed);
        }

        self.store
            .restore(index)
            .map_err(|_| HistoryError::NotFound { index })
    }

    /// Record text supplied directly by a caller rather than read from the
    /// system clipboard. Always stored as `ContentType::Text`.
    pub fn record_text(&mut self, text: &str) -> Result<EntryId> {
        self.store
            .insert(text.as_bytes(), ContentType::Text, Some(API_SOURCE))
    }

    /// Mark monitoring as active. Polling itself is the caller's job.
    pub fn start_monitoring(&mut self) {
        if !self.monitoring {
            self.monitoring = true;
            info!("Clipboard monitoring started");
        }
    }

    pub fn stop_monitoring(&mut self) {
        if self.monitoring {
            self.monitoring = false;
            info!("Clipboard monitoring stopped");
        }
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HistoryStore {
        &mut self.store
    }

    pub fn query(&self) -> QueryEngine<'_> {
        self.store.query()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard_history::test_support::FakeClipboard;
    use crate::config::{HistoryConfig, MAX_HISTORY};

    #[test]
    fn test_external_change_is_classified_and_recorded() {
        let mut facade = ClipboardFacade::new(FakeClipboard::with_content("report.pdf"));

        let id = match facade.on_external_change() {
            ChangeOutcome::Recorded(id) => id,
            other => panic!("expected Recorded, got {:?}", other),
        };

        let entry = facade.store().get(0).unwrap();
        assert_eq!(entry.id(), &id);
        assert_eq!(entry.content_type(), ContentType::File);
        assert_eq!(entry.source_app(), "unknown");
    }

    #[test]
    fn test_external_change_uses_backend_source_app() {
        let backend = FakeClipboard::with_content("hello").source("Terminal");
        let mut facade = ClipboardFacade::new(backend);
        facade.on_external_change();
        assert_eq!(facade.store().get(0).unwrap().source_app(), "Terminal");
    }

    #[test]
    fn test_external_change_flags_sensitive_content() {
        let mut facade = ClipboardFacade::new(FakeClipboard::with_content("secret token"));
        facade.on_external_change();
        assert!(facade.store().get(0).unwrap().is_sensitive());
    }

    #[test]
    fn test_external_change_with_empty_clipboard() {
        let mut facade = ClipboardFacade::new(FakeClipboard::default());
        assert_eq!(facade.on_external_change(), ChangeOutcome::NoContent);
        assert!(facade.store().is_empty());
    }

    #[test]
    fn test_external_change_with_empty_content_is_skipped() {
        let mut facade = ClipboardFacade::new(FakeClipboard::with_content(""));
        assert_eq!(
            facade.on_external_change(),
            ChangeOutcome::Skipped(RejectReason::Empty)
        );
    }

    #[test]
    fn test_external_change_when_full_is_skipped() {
        let mut facade = ClipboardFacade::new(FakeClipboard::with_content("new"));
        for i in 0..MAX_HISTORY {
            facade.record_text(&format!("{}", i)).unwrap();
        }

        assert_eq!(
            facade.on_external_change(),
            ChangeOutcome::Skipped(RejectReason::Full)
        );
        assert_eq!(facade.store().len(), MAX_HISTORY);
    }

    #[test]
    fn test_external_change_oversized_is_skipped() {
        let store = HistoryStore::with_config(HistoryConfig {
            max_content_size: 4,
            ..HistoryConfig::default()
        });
        let mut facade = ClipboardFacade::with_store(store, FakeClipboard::with_content("too long"));
        assert_eq!(
            facade.on_external_change(),
            ChangeOutcome::Skipped(RejectReason::TooLarge { size: 8, max: 4 })
        );
    }

    #[test]
    fn test_restore_writes_content_and_activates_entry() {
        let mut facade = ClipboardFacade::new(FakeClipboard::default());
        facade.record_text("first").unwrap();
        facade.record_text("second").unwrap();

        facade.restore(0).unwrap();
        assert_eq!(facade.backend().written(), vec![b"first".to_vec()]);
        assert_eq!(facade.store().current_index(), 0);
        assert_eq!(facade.store().active_text().as_deref(), Some("first"));
    }

    #[test]
    fn test_restore_invalid_index_is_not_found() {
        let mut facade = ClipboardFacade::new(FakeClipboard::default());
        facade.record_text("only").unwrap();

        assert_eq!(facade.restore(3), Err(HistoryError::NotFound { index: 3 }));
        assert!(facade.backend().written().is_empty());
    }

    #[test]
    fn test_restore_write_failure() {
        let mut facade = ClipboardFacade::new(FakeClipboard::default().failing_writes());
        facade.record_text("a").unwrap();
        facade.record_text("b").unwrap();

        assert_eq!(facade.restore(0), Err(HistoryError::WriteFailed));
        assert_eq!(facade.store().current_index(), 1);
    }

    #[test]
    fn test_record_text_is_text_from_api() {
        let mut facade = ClipboardFacade::new(FakeClipboard::default());
        facade.record_text("photo.png").unwrap();

        let entry = facade.store().get(0).unwrap();
        assert_eq!(entry.content_type(), ContentType::Text);
        assert_eq!(entry.source_app(), API_SOURCE);
    }

    #[test]
    fn test_monitoring_flag_toggles() {
        let mut facade = ClipboardFacade::new(FakeClipboard::default());
        assert!(!facade.is_monitoring());
        facade.start_monitoring();
        facade.start_monitoring();
        assert!(facade.is_monitoring());
        facade.stop_monitoring();
        assert!(!facade.is_monitoring());
    }

    #[test]
    fn test_query_through_facade() {
        let mut facade = ClipboardFacade::new(FakeClipboard::default());
        for text in ["alpha", "beta", "alphabet"] {
            facade.record_text(text).unwrap();
        }
        let results = facade.query().search("alpha");
        assert_eq!(results.len(), 2);
    }
}
