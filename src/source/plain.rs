//! Plain-text source for documents that are already text.

use std::path::Path;

use crate::error::Result;

use super::TextSource;

/// Reads a file as UTF-8, replacing invalid sequences.
#[derive(Debug, Clone, Default)]
pub struct PlainTextSource {
    _private: (),
}

impl PlainTextSource {
    /// Create a new plain-text source.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextSource for PlainTextSource {
    fn name(&self) -> &str {
        "text"
    }

    fn load_text(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path)?;
        self.load_bytes(&data)
    }

    fn load_bytes(&self, data: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe\nSKILLS\n").unwrap();

        let text = PlainTextSource::new().load_text(&path).unwrap();
        assert_eq!(text, "Jane Doe\nSKILLS\n");
    }

    #[test]
    fn test_plain_source_is_lossy() {
        let text = PlainTextSource::new().load_bytes(b"caf\xe9").unwrap();
        assert_eq!(text, "caf\u{FFFD}");
    }
}
