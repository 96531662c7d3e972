//! # unresume
//!
//! Structured field extraction from resume documents.
//!
//! This library decodes resumes to plain text, runs a language model over
//! the text once, and fills a fixed-shape record of nine fields: name,
//! email, mobile number, skills, education, experience, competencies,
//! measurable results and LinkedIn profile.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::{extract_file, render};
//!
//! fn main() -> unresume::Result<()> {
//!     // Decode a PDF and extract its fields
//!     let record = extract_file("resume.pdf")?;
//!
//!     // Print one `key: value` line per field
//!     print!("{}", render::record_to_pretty(&record));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fixed record shape**: every field is always present, absent ones as `None`
//! - **Offline language model**: deterministic rule-based tagging and entities
//! - **Parallel batches**: one model per worker, results in submission order
//! - **Text normalization**: Unicode NFC, ligatures, odd spaces

pub mod assemble;
pub mod batch;
pub mod detect;
pub mod error;
pub mod extract;
pub mod nlp;
pub mod normalize;
pub mod record;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use assemble::{ExtractOptions, RecordAssembler};
pub use batch::{
    discover_documents, process_document, run_batch, BatchEvent, BatchOptions, DocumentOutcome,
};
pub use detect::{pdf_version, sniff_bytes, sniff_path, DocumentKind};
pub use error::{Error, Result};
pub use nlp::{Analysis, LanguageModel, RuleBasedModel};
pub use normalize::{NormalizeOptions, Normalizer};
pub use record::{ExtractedRecord, Field, FieldValue};
pub use render::JsonFormat;
pub use source::{ErrorMode, LoadOptions, PdfTextSource, PlainTextSource, TextSource};

use std::path::Path;

/// Build an assembler with the built-in rule-based model.
///
/// # Example
///
/// ```
/// use unresume::{default_assembler, ExtractOptions};
///
/// let assembler = default_assembler(ExtractOptions::default()).unwrap();
/// let record = assembler.assemble("Call 9876543210 now");
/// assert_eq!(record.mobile_number.as_deref(), Some("9876543210"));
/// ```
pub fn default_assembler(options: ExtractOptions) -> Result<RecordAssembler> {
    RecordAssembler::new(Box::new(RuleBasedModel::new()?), options)
}

/// Extract a record from already decoded text.
///
/// Builds a fresh model for each call; reuse a [`RecordAssembler`] when
/// extracting many documents.
pub fn extract_text(text: &str) -> Result<ExtractedRecord> {
    Ok(default_assembler(ExtractOptions::default())?.assemble(text))
}

/// Decode a PDF file and extract its record.
///
/// # Example
///
/// ```no_run
/// use unresume::extract_file;
///
/// let record = extract_file("resume.pdf").unwrap();
/// println!("{}", record);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractedRecord> {
    extract_file_with_options(path, &PdfTextSource::new(), ExtractOptions::default())
}

/// Decode a file with `source` and extract its record with custom options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    source: &dyn TextSource,
    options: ExtractOptions,
) -> Result<ExtractedRecord> {
    let assembler = default_assembler(options)?;
    process_document(path.as_ref(), source, &assembler)
}

/// Decode a PDF file to plain text, without extracting fields.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String> {
    PdfTextSource::new().load_text(path.as_ref())
}
