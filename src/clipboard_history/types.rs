//! Core types for clipboard history
//!
//! Contains ContentType, EntryId, HistoryEntry and Stats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Source label used when the originating application is not known
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Maximum length of a source application label in bytes
pub const MAX_SOURCE_APP_LEN: usize = 255;

/// Content types for clipboard entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Image,
    File,
    RichText,
    Url,
    Unknown,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::File => "file",
            ContentType::RichText => "rich_text",
            ContentType::Url => "url",
            ContentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate a fresh random identifier in canonical hyphenated form
/// (36 lowercase hex characters and hyphens).
pub fn generate_unique_id() -> String {
    Uuid::new_v4().to_string()
}

/// Unique identifier of a history entry, never reused
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        EntryId(generate_unique_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single clipboard history entry.
///
/// Entries are immutable once created: the store hands out shared
/// references only, and every field is read through an accessor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    id: EntryId,
    content_type: ContentType,
    #[serde(serialize_with = "serialize_lossy")]
    content: Vec<u8>,
    content_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
    timestamp: DateTime<Utc>,
    source_app: String,
    is_sensitive: bool,
}

fn serialize_lossy<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(content))
}

impl HistoryEntry {
    pub(crate) fn new(
        content: Vec<u8>,
        content_type: ContentType,
        source_app: Option<&str>,
        metadata: Option<serde_json::Value>,
        is_sensitive: bool,
    ) -> Self {
        let content_size = content.len();
        HistoryEntry {
            id: EntryId::generate(),
            content_type,
            content,
            content_size,
            metadata,
            timestamp: Utc::now(),
            source_app: normalize_source_app(source_app),
            is_sensitive,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8, if it is valid UTF-8
    pub fn content_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Owned text copy of the content (invalid UTF-8 is replaced)
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    pub fn content_size(&self) -> usize {
        self.content_size
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn source_app(&self) -> &str {
        &self.source_app
    }

    /// Whether the content looked like it held a secret at insertion time.
    /// This is a flag only; the content is stored as-is.
    pub fn is_sensitive(&self) -> bool {
        self.is_sensitive
    }

    /// Short display preview of at most `max_chars` characters, with a
    /// trailing "..." when the content was cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let text = String::from_utf8_lossy(&self.content);
        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.into_owned(),
        }
    }
}

/// Trim a source label to `MAX_SOURCE_APP_LEN` bytes on a char boundary.
/// Missing or empty labels become `UNKNOWN_SOURCE`.
fn normalize_source_app(source_app: Option<&str>) -> String {
    let source = match source_app.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return UNKNOWN_SOURCE.to_string(),
    };
    if source.len() <= MAX_SOURCE_APP_LEN {
        return source.to_string();
    }
    let mut end = MAX_SOURCE_APP_LEN;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    source[..end].to_string()
}

/// Aggregate statistics over the whole history.
///
/// On an empty history all counts are zero and both timestamps are the
/// Unix epoch (1970-01-01T00:00:00Z).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_items: usize,
    pub text_items: usize,
    pub image_items: usize,
    pub file_items: usize,
    pub total_size: usize,
    pub oldest_item: DateTime<Utc>,
    pub newest_item: DateTime<Utc>,
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            total_items: 0,
            text_items: 0,
            image_items: 0,
            file_items: 0,
            total_size: 0,
            oldest_item: DateTime::<Utc>::UNIX_EPOCH,
            newest_item: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}
