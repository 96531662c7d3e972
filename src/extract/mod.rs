//! Field extractors.
//!
//! Each extractor owns one strategy for one [`Field`] of the record. They are
//! pure functions of a [`DocumentInput`]: the same text and analysis always
//! give the same answer, and "nothing found" is `None`, never an error.
//!
//! # Example
//!
//! ```
//! use unresume::extract::{DocumentInput, EmailExtractor, FieldExtractor};
//! use unresume::nlp::Analysis;
//!
//! fn main() -> unresume::Result<()> {
//!     let analysis = Analysis::default();
//!     let input = DocumentInput::new("Reach me at jane@example.com", &analysis);
//!     let email = EmailExtractor::new()?.extract(&input);
//!     assert_eq!(email.as_deref(), Some("jane@example.com"));
//!     Ok(())
//! }
//! ```

mod competencies;
mod contact;
mod keyword;
mod name;
mod results;
mod skills;

pub use competencies::CompetenciesExtractor;
pub use contact::{EmailExtractor, LinkedinExtractor, MobileNumberExtractor};
pub use keyword::KeywordExtractor;
pub use name::NameExtractor;
pub use results::MeasurableResultsExtractor;
pub use skills::{SkillsExtractor, SKILL_LABELS};

use crate::nlp::{Analysis, EntitySpan, NounChunk, Token};
use crate::record::Field;

/// Everything an extractor may look at for one document.
///
/// The analysis is computed once by the assembler and shared read-only.
#[derive(Debug, Clone, Copy)]
pub struct DocumentInput<'a> {
    text: &'a str,
    analysis: &'a Analysis,
}

impl<'a> DocumentInput<'a> {
    /// Create an input view over prepared text and its analysis.
    pub fn new(text: &'a str, analysis: &'a Analysis) -> Self {
        Self { text, analysis }
    }

    /// The document text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The full language model analysis.
    pub fn analysis(&self) -> &'a Analysis {
        self.analysis
    }

    /// Entity spans in document order.
    pub fn entities(&self) -> &'a [EntitySpan] {
        &self.analysis.entities
    }

    /// Noun phrases in document order.
    pub fn noun_chunks(&self) -> &'a [NounChunk] {
        &self.analysis.noun_chunks
    }

    /// Tagged tokens in document order.
    pub fn tokens(&self) -> &'a [Token] {
        &self.analysis.tokens
    }
}

/// Trait for field extractors.
///
/// Implement this trait to add another extraction strategy for a field.
pub trait FieldExtractor: Send + Sync {
    /// The value stored in the record slot.
    type Output;

    /// The record slot this extractor fills.
    fn field(&self) -> Field;

    /// Extract the value, or `None` when absent.
    fn extract(&self, input: &DocumentInput<'_>) -> Option<Self::Output>;
}

/// Byte offset of the end of the line containing `pos` (the `\n` itself, or
/// the end of the text).
pub(crate) fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map_or(text.len(), |i| pos + i)
}

/// The character ending right before byte offset `pos`.
pub(crate) fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_end() {
        let text = "one\ntwo";
        assert_eq!(line_end(text, 0), 3);
        assert_eq!(line_end(text, 3), 3);
        assert_eq!(line_end(text, 4), 7);
        assert_eq!(line_end(text, 7), 7);
    }

    #[test]
    fn test_char_before() {
        assert_eq!(char_before("a é", 2), Some(' '));
        assert_eq!(char_before("é1", 2), Some('é'));
        assert_eq!(char_before("x", 0), None);
    }

    #[test]
    fn test_document_input_views() {
        let analysis = Analysis::default();
        let input = DocumentInput::new("text", &analysis);
        assert_eq!(input.text(), "text");
        assert!(input.entities().is_empty());
        assert!(input.noun_chunks().is_empty());
        assert!(input.tokens().is_empty());
    }
}
