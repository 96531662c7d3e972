//! Text sources turn a document on disk into one plain-text string.
//!
//! The extraction pipeline only ever sees the returned string. A source that
//! cannot decode a document fails that document; nothing is recovered.

mod pdf;
mod plain;

pub use pdf::PdfTextSource;
pub use plain::PlainTextSource;

use crate::error::Result;
use std::path::Path;

/// Trait for document text sources.
///
/// Implement this trait to support another document format.
pub trait TextSource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Load the full text of the document at `path`.
    fn load_text(&self, path: &Path) -> Result<String>;

    /// Load the full text of an in-memory document.
    fn load_bytes(&self, data: &[u8]) -> Result<String>;
}

/// Options for loading document text.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Error handling mode for per-page failures
    pub error_mode: ErrorMode,
}

impl LoadOptions {
    /// Create new load options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip pages whose text cannot be extracted).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }
}

/// Error handling mode while extracting page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the document on the first unreadable page
    #[default]
    Strict,
    /// Skip unreadable pages and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_builder() {
        assert_eq!(LoadOptions::new().error_mode, ErrorMode::Strict);
        assert_eq!(LoadOptions::new().lenient().error_mode, ErrorMode::Lenient);
        assert_eq!(
            LoadOptions::new()
                .lenient()
                .with_error_mode(ErrorMode::Strict)
                .error_mode,
            ErrorMode::Strict
        );
    }
}
