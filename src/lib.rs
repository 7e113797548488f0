//! EdgeBoard clipboard history
//!
//! A bounded in-memory clipboard history: records clipboard snapshots,
//! classifies them, and lets callers browse, search, filter and restore
//! past entries. The OS clipboard is reached only through the
//! [`ClipboardBackend`] trait.
//!
//! ```rust,ignore
//! use edgeboard_clipboard::{config, ClipboardFacade, HistoryStore, SystemClipboard};
//!
//! let _guard = edgeboard_clipboard::logging::init();
//! let store = HistoryStore::with_config(config::load_config());
//! let mut facade = ClipboardFacade::with_store(store, SystemClipboard::new()?);
//!
//! // Called by the platform monitor whenever the clipboard changes
//! facade.on_external_change();
//! let hits = facade.query().search("invoice");
//! ```

pub mod clipboard_history;
pub mod config;
pub mod error;
pub mod logging;

pub use clipboard_history::{
    classify, is_sensitive, ChangeOutcome, ClipboardBackend, ClipboardFacade, ContentType,
    EntryId, HistoryEntry, HistoryStore, QueryEngine, SharedHistory, Stats, SystemClipboard,
};
pub use config::{CapacityPolicy, HistoryConfig};
pub use error::{HistoryError, RejectReason};
