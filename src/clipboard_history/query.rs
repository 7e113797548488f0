//! Read-only queries over a history store
//!
//! All results borrow from the store; they cannot outlive the borrow and
//! therefore cannot observe a later `clear()` or insert. Scans are linear,
//! which is fine at the capacities the store allows.

use super::classifier;
use super::store::HistoryStore;
use super::types::{ContentType, HistoryEntry, Stats};

/// Query view over a `HistoryStore` snapshot
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    entries: &'a [HistoryEntry],
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a HistoryStore) -> Self {
        QueryEngine {
            entries: store.entries(),
        }
    }

    /// Entries whose content contains `query`, oldest first.
    ///
    /// An empty query matches nothing rather than everything.
    pub fn search(&self, query: &str) -> Vec<&'a HistoryEntry> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.as_bytes();
        self.entries
            .iter()
            .filter(|entry| classifier::contains(entry.content(), needle))
            .collect()
    }

    /// Entries of the given type, oldest first
    pub fn filter_by_type(&self, content_type: ContentType) -> Vec<&'a HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.content_type() == content_type)
            .collect()
    }

    /// The `n` most recently inserted entries, newest first
    pub fn recent(&self, n: usize) -> Vec<&'a HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Aggregate counts, total size and timestamp range in a single pass
    pub fn stats(&self) -> Stats {
        let mut entries = self.entries.iter();
        let Some(first) = entries.next() else {
            return Stats::default();
        };

        let mut stats = Stats {
            oldest_item: first.timestamp(),
            newest_item: first.timestamp(),
            ..Stats::default()
        };

        for entry in std::iter::once(first).chain(entries) {
            stats.total_items += 1;
            stats.total_size += entry.content_size();
            match entry.content_type() {
                ContentType::Text => stats.text_items += 1,
                ContentType::Image => stats.image_items += 1,
                ContentType::File => stats.file_items += 1,
                _ => {}
            }
            stats.oldest_item = stats.oldest_item.min(entry.timestamp());
            stats.newest_item = stats.newest_item.max(entry.timestamp());
        }

        stats
    }
}
