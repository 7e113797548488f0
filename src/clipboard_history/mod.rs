//! Clipboard History Module
//!
//! Bounded in-memory clipboard history with type classification and
//! search/filter/stats queries.
//!
//! ## Features
//! - Up to 100 entries of at most 1 MiB each (configurable)
//! - Reject-on-full by default, optional evict-oldest ring behaviour
//! - Heuristic content typing (image / file / text) and sensitivity flag
//! - Substring search, type filter, most-recent-N, aggregate stats
//! - Restore any entry back to the system clipboard
//!
//! ## Module Structure
//! - `types`: Core types (ContentType, EntryId, HistoryEntry, Stats)
//! - `classifier`: Content type and sensitivity heuristics
//! - `store`: Fixed-capacity entry store and active-entry tracking
//! - `query`: Read-only queries borrowing the store
//! - `facade`: System clipboard orchestration (`ClipboardBackend` seam)
//! - `shared`: Mutex-guarded handle for multi-threaded callers
//! - `system`: arboard-backed `ClipboardBackend`

mod classifier;
mod facade;
mod query;
mod shared;
mod store;
mod system;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Types
pub use types::{
    generate_unique_id, ContentType, EntryId, HistoryEntry, Stats, MAX_SOURCE_APP_LEN,
    UNKNOWN_SOURCE,
};

// Classification
pub use classifier::{classify, is_sensitive, TEXT_SIZE_LIMIT};

// Store and queries
pub use query::QueryEngine;
pub use store::HistoryStore;

// Facade
pub use facade::{ChangeOutcome, ClipboardBackend, ClipboardFacade, API_SOURCE};
pub use shared::SharedHistory;
pub use system::SystemClipboard;
