//! Language model service: entity spans, noun chunks and part-of-speech tags.
//!
//! The extraction pipeline treats the model as a pure function of text. It
//! is invoked once per document and its [`Analysis`] is shared, read-only,
//! by every extractor.
//!
//! # Example
//!
//! ```
//! use unresume::nlp::{LanguageModel, RuleBasedModel};
//!
//! fn main() -> unresume::Result<()> {
//!     let model = RuleBasedModel::new()?;
//!     let analysis = model.analyze("Jane Doe\nManaged a team of 5 engineers.");
//!     assert_eq!(analysis.first_person(), Some("Jane Doe"));
//!     Ok(())
//! }
//! ```

mod chunker;
mod entities;
mod lexicon;
mod rules;
mod tagger;

pub use lexicon::Lexicon;
pub use rules::RuleBasedModel;
pub use tagger::tokenize;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of an entity span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    /// A person's name
    Person,
    /// Companies, universities, institutions
    Org,
    /// Absolute or relative dates
    Date,
    /// Any label produced by another model implementation
    Other(String),
}

impl EntityLabel {
    /// The conventional upper-case label name.
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Date => "DATE",
            EntityLabel::Other(label) => label,
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled substring of the analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Semantic category
    pub label: EntityLabel,
    /// Covered text
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl EntitySpan {
    /// Create a new entity span.
    pub fn new(label: EntityLabel, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label,
            text: text.into(),
            start,
            end,
        }
    }
}

/// A contiguous noun phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounChunk {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Aux,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Punctuation,
    Symbol,
    Other,
}

impl PosTag {
    /// The universal dependencies tag name (e.g. "VERB").
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Aux => "AUX",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Adposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Numeral => "NUM",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::Other => "X",
        }
    }

    /// Whether the tag heads a noun phrase.
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: PosTag,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, pos: PosTag, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            pos,
            start,
            end,
        }
    }
}

/// Everything one model pass produces for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Entity spans in document order
    pub entities: Vec<EntitySpan>,
    /// Noun phrases in document order
    pub noun_chunks: Vec<NounChunk>,
    /// Tagged tokens in document order
    pub tokens: Vec<Token>,
}

impl Analysis {
    /// Text of the first PERSON entity, if any.
    pub fn first_person(&self) -> Option<&str> {
        self.entities
            .iter()
            .find(|e| e.label == EntityLabel::Person)
            .map(|e| e.text.as_str())
    }

    /// Iterate over tokens carrying the given tag.
    pub fn tokens_tagged(&self, pos: PosTag) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.pos == pos)
    }
}

/// Trait for language model implementations.
///
/// Each batch worker owns its own instance, so implementations need to be
/// `Send` but never shared between threads.
pub trait LanguageModel: Send {
    /// Get the name of this model.
    fn name(&self) -> &str;

    /// Analyse `text` in a single pass.
    fn analyze(&self, text: &str) -> Analysis;
}

impl<M: LanguageModel + ?Sized> LanguageModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn analyze(&self, text: &str) -> Analysis {
        (**self).analyze(text)
    }
}
