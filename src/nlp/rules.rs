//! Deterministic, lexicon-driven language model.

use std::path::Path;

use crate::error::Result;

use super::chunker::noun_chunks;
use super::entities::EntityRecognizer;
use super::lexicon::Lexicon;
use super::tagger::Tagger;
use super::{Analysis, LanguageModel};

/// Offline language model built from word lists and shape rules.
///
/// Loading the lexicon is the only fallible step; once constructed the
/// model is a pure function of its input text.
#[derive(Debug, Clone)]
pub struct RuleBasedModel {
    lexicon: Lexicon,
    tagger: Tagger,
    recognizer: EntityRecognizer,
}

impl RuleBasedModel {
    /// Create a model with the built-in lexicon.
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Lexicon::builtin()?)
    }

    /// Create a model with a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        let tagger = Tagger::new()?;
        let recognizer = EntityRecognizer::new(&lexicon)?;
        Ok(Self {
            lexicon,
            tagger,
            recognizer,
        })
    }

    /// Create a model from a lexicon JSON file.
    pub fn from_lexicon_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_lexicon(Lexicon::from_path(path)?)
    }

    /// Get the lexicon backing this model.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl LanguageModel for RuleBasedModel {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.tagger.tag(text, &self.lexicon);
        let entities = self.recognizer.recognize(text, &tokens, &self.lexicon);
        let noun_chunks = noun_chunks(text, &tokens);

        log::trace!(
            "Analysed {} bytes: {} tokens, {} entities, {} noun chunks",
            text.len(),
            tokens.len(),
            entities.len(),
            noun_chunks.len()
        );

        Analysis {
            entities,
            noun_chunks,
            tokens,
        }
    }
}
