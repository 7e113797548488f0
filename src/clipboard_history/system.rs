//! System clipboard backend
//!
//! Plain-text access to the OS clipboard through arboard. Images and rich
//! formats are not negotiated; only text is read or written.

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::{debug, warn};

use super::facade::ClipboardBackend;

pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard.
    ///
    /// # Errors
    /// Fails when no clipboard is available (e.g. headless Linux without
    /// an X11/Wayland session).
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to create clipboard instance")?;
        Ok(SystemClipboard { clipboard })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn read(&mut self) -> Option<Vec<u8>> {
        match self.clipboard.get_text() {
            Ok(text) if !text.is_empty() => Some(text.into_bytes()),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "No text on system clipboard");
                None
            }
        }
    }

    fn write(&mut self, content: &[u8]) -> bool {
        let text = String::from_utf8_lossy(content).into_owned();
        match self.clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, content_size = content.len(), "Failed to set clipboard text");
                false
            }
        }
    }
}
