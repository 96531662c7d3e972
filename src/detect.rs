//! Document header sniffing.
//!
//! The batch driver hands every discovered file to the text source, so the
//! PDF source checks the header itself before asking lopdf to load anything.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Bytes needed to read the magic plus a `x.y` version.
const HEADER_LEN: usize = PDF_MAGIC.len() + 3;

/// What a document header says about its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// A PDF file with the given header version (e.g. "1.7").
    Pdf { version: String },
    /// Anything else.
    Unknown,
}

impl DocumentKind {
    /// Whether this is a PDF document.
    pub fn is_pdf(&self) -> bool {
        matches!(self, DocumentKind::Pdf { .. })
    }
}

/// Classify a document from its leading bytes.
pub fn sniff_bytes(data: &[u8]) -> DocumentKind {
    match pdf_version(data) {
        Ok(version) => DocumentKind::Pdf { version },
        Err(_) => DocumentKind::Unknown,
    }
}

/// Classify a document on disk by reading its header.
pub fn sniff_path<P: AsRef<Path>>(path: P) -> Result<DocumentKind> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    Ok(sniff_bytes(&header))
}

/// Read the PDF version from a `%PDF-x.y` header.
///
/// Returns [`Error::UnknownFormat`] when the data does not start with a
/// well-formed PDF header.
pub fn pdf_version(data: &[u8]) -> Result<String> {
    if data.len() < HEADER_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    match &data[PDF_MAGIC.len()..HEADER_LEN] {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(format!("{}.{}", *major as char, *minor as char))
        }
        _ => Err(Error::UnknownFormat),
    }
}
