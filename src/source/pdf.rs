//! PDF text source backed by lopdf.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::pdf_version;
use crate::error::{Error, Result};

use super::{ErrorMode, LoadOptions, TextSource};

/// Extracts the text of every page of a PDF, in page order.
///
/// Page texts are concatenated with nothing inserted between them, so a
/// field that straddles a page break may come out split or run together.
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource {
    options: LoadOptions,
}

impl PdfTextSource {
    /// Create a new PDF source with default (strict) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a PDF source with custom options.
    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    fn load_document(&self, data: &[u8]) -> Result<LopdfDocument> {
        let version = pdf_version(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        log::debug!(
            "Loaded PDF {} with {} pages (encrypted: {})",
            version,
            doc.get_pages().len(),
            doc.is_encrypted()
        );
        Ok(doc)
    }

    fn collect_text(&self, doc: &LopdfDocument) -> Result<String> {
        let mut text = String::new();

        // BTreeMap keys come out in page-number order.
        for page_num in doc.get_pages().keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    if doc.is_encrypted() {
                        return Err(Error::Encrypted);
                    }
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(Error::TextExtract(format!("Page {}: {}", page_num, e)));
                    }
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                }
            }
        }

        Ok(text)
    }
}

impl TextSource for PdfTextSource {
    fn name(&self) -> &str {
        "pdf"
    }

    fn load_text(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path)?;
        self.load_bytes(&data)
    }

    fn load_bytes(&self, data: &[u8]) -> Result<String> {
        let doc = self.load_document(data)?;
        self.collect_text(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_source_name() {
        assert_eq!(PdfTextSource::new().name(), "pdf");
    }

    #[test]
    fn test_non_pdf_bytes_are_rejected() {
        let source = PdfTextSource::new();
        let result = source.load_bytes(b"Jane Doe\njane@example.com\n");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = PdfTextSource::new();
        let result = source.load_text(Path::new("/nonexistent/resume.pdf"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
