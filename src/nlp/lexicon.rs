//! Word lists backing the rule-based model.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

const BUILTIN_LEXICON: &str = include_str!("lexicon.json");

/// On-disk shape of a lexicon file.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    determiners: Vec<String>,
    pronouns: Vec<String>,
    prepositions: Vec<String>,
    conjunctions: Vec<String>,
    auxiliaries: Vec<String>,
    adverbs: Vec<String>,
    verbs: Vec<String>,
    #[serde(default)]
    non_name_words: Vec<String>,
    #[serde(default)]
    org_suffixes: Vec<String>,
    #[serde(default)]
    months: Vec<String>,
}

/// Lower-cased word sets used by the tagger and entity recognizer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub determiners: HashSet<String>,
    pub pronouns: HashSet<String>,
    pub prepositions: HashSet<String>,
    pub conjunctions: HashSet<String>,
    pub auxiliaries: HashSet<String>,
    pub adverbs: HashSet<String>,
    /// Verb lemmas (base forms)
    pub verbs: HashSet<String>,
    /// Capitalized words that never start or continue a person name
    pub non_name_words: HashSet<String>,
    /// Final words that turn a capitalized run into an organisation
    pub org_suffixes: HashSet<String>,
    /// Month names and abbreviations
    pub months: HashSet<String>,
}

impl Lexicon {
    /// Load the lexicon compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LEXICON)
    }

    /// Parse a lexicon from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile =
            serde_json::from_str(json).map_err(|e| Error::Lexicon(e.to_string()))?;
        let lexicon = Self {
            determiners: word_set(file.determiners),
            pronouns: word_set(file.pronouns),
            prepositions: word_set(file.prepositions),
            conjunctions: word_set(file.conjunctions),
            auxiliaries: word_set(file.auxiliaries),
            adverbs: word_set(file.adverbs),
            verbs: word_set(file.verbs),
            non_name_words: word_set(file.non_name_words),
            org_suffixes: word_set(file.org_suffixes),
            months: word_set(file.months),
        };

        if lexicon.verbs.is_empty() {
            return Err(Error::Lexicon("verb list is empty".to_string()));
        }

        log::debug!(
            "Lexicon loaded: {} verbs, {} closed-class words",
            lexicon.verbs.len(),
            lexicon.closed_class_len()
        );
        Ok(lexicon)
    }

    /// Load a lexicon from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Lexicon(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Whether `lower` is a function word (determiner, pronoun, preposition,
    /// conjunction or auxiliary).
    pub fn is_function_word(&self, lower: &str) -> bool {
        self.determiners.contains(lower)
            || self.pronouns.contains(lower)
            || self.prepositions.contains(lower)
            || self.conjunctions.contains(lower)
            || self.auxiliaries.contains(lower)
    }

    /// Find the verb lemma of an inflected form, if it is a known verb.
    ///
    /// Handles `-s`, `-es`, `-ies`, `-ed`, `-ied`, `-ing` and doubled final
    /// consonants (`planned`, `running`).
    pub fn verb_lemma(&self, lower: &str) -> Option<String> {
        if self.verbs.contains(lower) {
            return Some(lower.to_string());
        }

        for (suffix, replacements) in INFLECTIONS {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            if stem.len() < 2 {
                continue;
            }
            for replacement in *replacements {
                let candidate = format!("{}{}", stem, replacement);
                if self.verbs.contains(&candidate) {
                    return Some(candidate);
                }
            }
            if let Some(undoubled) = undouble(stem) {
                if self.verbs.contains(undoubled) {
                    return Some(undoubled.to_string());
                }
            }
        }

        None
    }

    fn closed_class_len(&self) -> usize {
        self.determiners.len()
            + self.pronouns.len()
            + self.prepositions.len()
            + self.conjunctions.len()
            + self.auxiliaries.len()
    }
}

/// Suffix and the endings to try on the remaining stem, most specific first.
const INFLECTIONS: &[(&str, &[&str])] = &[
    ("ied", &["y"]),
    ("ies", &["y"]),
    ("ing", &["", "e"]),
    ("ed", &["", "e"]),
    ("es", &["", "e"]),
    ("s", &[""]),
];

fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 3
        && bytes[n - 1].is_ascii_alphabetic()
        && bytes[n - 1] == bytes[n - 2]
        && !b"aeiou".contains(&bytes[n - 1])
    {
        Some(&stem[..n - 1])
    } else {
        None
    }
}

fn word_set(words: Vec<String>) -> HashSet<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
