//! Content classification
//!
//! Maps raw clipboard bytes to a `ContentType` and flags content that looks
//! sensitive. Both are substring heuristics, not format sniffing.
//!
//! Checks run in a fixed order (image, then file, then text) because one
//! payload can match several of them: a path like `scan.png.pdf` is an
//! image here, not a file.

use super::types::ContentType;

/// Content shorter than this many bytes is considered text
pub const TEXT_SIZE_LIMIT: usize = 4096;

/// PNG signature (without the trailing CRLF/EOF bytes)
const PNG_MAGIC: &[u8] = b"\x89PNG";

/// JFIF APP0 marker found in most JPEG headers
const JFIF_MARKER: &[u8] = b"JFIF";

const IMAGE_EXTENSIONS: &[&[u8]] = &[b".png", b".jpg", b".jpeg"];
const FILE_EXTENSIONS: &[&[u8]] = &[b".pdf", b".doc", b".txt"];

/// Case-sensitive keywords that mark content as sensitive
const SENSITIVE_KEYWORDS: &[&[u8]] = &[b"password", b"secret"];

/// Classify clipboard content.
///
/// Returns `Unknown` for empty content and for content of
/// `TEXT_SIZE_LIMIT` bytes or more that matches no other heuristic.
pub fn classify(content: &[u8]) -> ContentType {
    if content.is_empty() {
        return ContentType::Unknown;
    }

    if contains(content, PNG_MAGIC) || contains(content, JFIF_MARKER) {
        return ContentType::Image;
    }
    if contains_any(content, IMAGE_EXTENSIONS) {
        return ContentType::Image;
    }
    if contains_any(content, FILE_EXTENSIONS) {
        return ContentType::File;
    }
    if content.len() < TEXT_SIZE_LIMIT {
        return ContentType::Text;
    }

    ContentType::Unknown
}

/// Best-effort check for secrets: true if the content contains
/// "password" or "secret" (case-sensitive).
///
/// This is a hint for the UI, not a security guarantee. It misses
/// most real credentials and flags harmless text that mentions the words.
pub fn is_sensitive(content: &[u8]) -> bool {
    contains_any(content, SENSITIVE_KEYWORDS)
}

/// Byte substring search. An empty needle never matches.
pub(crate) fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

fn contains_any(haystack: &[u8], needles: &[&[u8]]) -> bool {
    needles.iter().any(|needle| contains(haystack, needle))
}
