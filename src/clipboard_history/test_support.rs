//! In-memory clipboard backend for tests

use super::facade::ClipboardBackend;

#[derive(Debug, Default)]
pub struct FakeClipboard {
    content: Option<Vec<u8>>,
    source_app: Option<String>,
    fail_writes: bool,
    written: Vec<Vec<u8>>,
}

impl FakeClipboard {
    pub fn with_content(content: &str) -> Self {
        FakeClipboard {
            content: Some(content.as_bytes().to_vec()),
            ..Default::default()
        }
    }

    pub fn source(mut self, app: &str) -> Self {
        self.source_app = Some(app.to_string());
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = Some(content.as_bytes().to_vec());
    }

    pub fn written(&self) -> Vec<Vec<u8>> {
        self.written.clone()
    }
}

impl ClipboardBackend for FakeClipboard {
    fn read(&mut self) -> Option<Vec<u8>> {
        self.content.clone()
    }

    fn write(&mut self, content: &[u8]) -> bool {
        if self.fail_writes {
            return false;
        }
        self.written.push(content.to_vec());
        self.content = Some(content.to_vec());
        true
    }

    fn source_app(&self) -> Option<String> {
        self.source_app.clone()
    }
}
