//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// What to do with an insertion once history holds `max_history` entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapacityPolicy {
    /// Refuse the new entry and keep existing history intact
    #[default]
    Reject,
    /// Drop the oldest entry to make room (ring buffer)
    EvictOldest,
}

/// Clipboard history settings, read from `~/.edgeboard/clipboard.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryConfig {
    /// Maximum number of entries (default: 100)
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Maximum bytes per entry; larger content is rejected (default: 1 MiB)
    #[serde(default = "default_max_content_size")]
    pub max_content_size: usize,
    /// Run the sensitivity heuristic on insert (default: true).
    /// When false every entry is stored with `is_sensitive = false`.
    #[serde(default = "default_flag_sensitive")]
    pub flag_sensitive: bool,
    /// Capacity policy once history is full (default: reject)
    #[serde(default)]
    pub when_full: CapacityPolicy,
}

fn default_max_history() -> usize {
    MAX_HISTORY
}
fn default_max_content_size() -> usize {
    MAX_CONTENT_SIZE
}
fn default_flag_sensitive() -> bool {
    DEFAULT_FLAG_SENSITIVE
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            max_history: MAX_HISTORY,
            max_content_size: MAX_CONTENT_SIZE,
            flag_sensitive: DEFAULT_FLAG_SENSITIVE,
            when_full: CapacityPolicy::default(),
        }
    }
}

impl HistoryConfig {
    /// Bring the limits into the supported range.
    ///
    /// The config may only lower the built-in caps: zero means "not set"
    /// and falls back to the default, anything above `MAX_HISTORY` or
    /// `MAX_CONTENT_SIZE` is clamped down to it.
    pub fn normalized(mut self) -> Self {
        self.max_history = clamp_limit(self.max_history, MAX_HISTORY);
        self.max_content_size = clamp_limit(self.max_content_size, MAX_CONTENT_SIZE);
        self
    }
}

fn clamp_limit(value: usize, cap: usize) -> usize {
    if value == 0 {
        cap
    } else {
        value.min(cap)
    }
}
