//! In-memory history store
//!
//! Fixed-capacity, insertion-ordered list of clipboard entries plus the
//! index of the active entry (the one considered "on the clipboard").
//! Position 0 is the oldest entry, `len() - 1` the newest.

use tracing::{debug, info};

use super::classifier;
use super::query::QueryEngine;
use super::types::{ContentType, EntryId, HistoryEntry};
use crate::config::{CapacityPolicy, HistoryConfig};
use crate::error::{HistoryError, RejectReason, Result};

/// Clipboard history owned by whichever component wires the app together.
///
/// Invariants:
/// - `len() <= capacity()`
/// - `current_index() < len()` whenever the store is non-empty, 0 otherwise
#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    current_index: usize,
    config: HistoryConfig,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    /// Create an empty store with default limits
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Create an empty store with the given limits
    pub fn with_config(config: HistoryConfig) -> Self {
        let config = config.normalized();
        HistoryStore {
            entries: Vec::with_capacity(config.max_history),
            current_index: 0,
            config,
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Record a new entry and make it the active one.
    ///
    /// # Errors
    /// - `Rejected(Empty)` for empty content
    /// - `Rejected(TooLarge)` if content exceeds `max_content_size`; checked
    ///   before the payload is copied
    /// - `Rejected(Full)` if history is at capacity under `CapacityPolicy::Reject`
    pub fn insert(
        &mut self,
        content: &[u8],
        content_type: ContentType,
        source_app: Option<&str>,
    ) -> Result<EntryId> {
        self.insert_with_metadata(content, content_type, source_app, None)
    }

    /// Same as [`insert`](Self::insert), attaching an opaque metadata payload.
    pub fn insert_with_metadata(
        &mut self,
        content: &[u8],
        content_type: ContentType,
        source_app: Option<&str>,
        metadata: Option<serde_json::Value>,
    ) -> Result<EntryId> {
        self.check_insertable(content)?;

        if self.is_full() {
            // check_insertable already rejected Full under CapacityPolicy::Reject
            let evicted = self.entries.remove(0);
            debug!(
                evicted_id = %evicted.id(),
                capacity = self.config.max_history,
                "Evicted oldest clipboard entry"
            );
        }

        let is_sensitive = self.config.flag_sensitive && classifier::is_sensitive(content);
        let entry = HistoryEntry::new(
            content.to_vec(),
            content_type,
            source_app,
            metadata,
            is_sensitive,
        );
        let id = entry.id().clone();

        self.entries.push(entry);
        self.current_index = self.entries.len() - 1;

        debug!(
            entry_id = %id,
            content_type = %content_type,
            content_size = content.len(),
            is_sensitive,
            count = self.entries.len(),
            "Added clipboard entry"
        );
        Ok(id)
    }

    fn check_insertable(&self, content: &[u8]) -> Result<()> {
        if content.is_empty() {
            return Err(HistoryError::Rejected(RejectReason::Empty));
        }
        if content.len() > self.config.max_content_size {
            return Err(HistoryError::Rejected(RejectReason::TooLarge {
                size: content.len(),
                max: self.config.max_content_size,
            }));
        }
        if self.is_full() && self.config.when_full == CapacityPolicy::Reject {
            return Err(HistoryError::Rejected(RejectReason::Full));
        }
        Ok(())
    }

    /// Entry at `index` (0 = oldest), or None if out of range
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Make the entry at `index` the active one. Entries are not touched.
    pub fn restore(&mut self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.current_index = index;
        debug!(index, entry_id = %self.entries[index].id(), "Restored clipboard entry");
        Ok(())
    }

    /// Drop every entry and reset the active index. Idempotent.
    pub fn clear(&mut self) {
        let cleared = self.entries.len();
        self.entries = Vec::with_capacity(self.config.max_history);
        self.current_index = 0;
        if cleared > 0 {
            info!(cleared, "Cleared clipboard history");
        }
    }

    /// The active entry, if any
    pub fn active(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.current_index)
    }

    /// Owned copy of the active entry's content if it is text
    pub fn active_text(&self) -> Option<String> {
        self.active()
            .filter(|entry| entry.content_type() == ContentType::Text)
            .map(HistoryEntry::to_text)
    }

    /// Size in bytes of the active entry, 0 when history is empty
    pub fn active_content_size(&self) -> usize {
        self.active().map_or(0, HistoryEntry::content_size)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.config.max_history
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.config.max_history
    }

    /// Read-only query view borrowing this store
    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(self)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
