//! Tokenizer and part-of-speech tagger.

use regex::Regex;

use crate::error::Result;

use super::lexicon::Lexicon;
use super::{PosTag, Token};

/// Words (with inner apostrophes, hyphens and dots, and trailing `+`/`#` for
/// names like `C++`), or any single non-space character.
const TOKEN_PATTERN: &str = r"[\p{L}\p{N}_]+(?:['’.\-][\p{L}\p{N}_]+)*[+#]*|\S";

const SYMBOLS: &[char] = &['%', '$', '€', '£', '@', '#', '+', '=', '*', '/', '\\', '<', '>', '|', '~', '^'];

/// Marks after which the next word starts a new sentence or bullet.
const SENTENCE_BREAKS: &[&str] = &[".", "!", "?", ":", ";", "•", "·", "-", "–", "*", "|"];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ic", "al"];

/// Rule-based tagger over a compiled token pattern.
#[derive(Debug, Clone)]
pub(crate) struct Tagger {
    token_re: Regex,
}

impl Tagger {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            token_re: Regex::new(TOKEN_PATTERN)?,
        })
    }

    /// Split `text` into `(start, end)` byte ranges.
    pub(crate) fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        self.token_re
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect()
    }

    /// Tokenize and tag `text`.
    pub(crate) fn tag(&self, text: &str, lexicon: &Lexicon) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();

        for (start, end) in self.spans(text) {
            let word = &text[start..end];
            let sentence_start = match tokens.last() {
                None => true,
                Some(prev) => {
                    text[prev.end..start].contains('\n')
                        || SENTENCE_BREAKS.contains(&prev.text.as_str())
                }
            };
            let prev_pos = tokens.last().map(|t| t.pos);
            let pos = tag_word(word, prev_pos, sentence_start, lexicon);
            tokens.push(Token::new(word, pos, start, end));
        }

        tokens
    }
}

/// Split text into token strings with the default pattern.
pub fn tokenize(text: &str) -> Result<Vec<&str>> {
    let tagger = Tagger::new()?;
    Ok(tagger
        .spans(text)
        .into_iter()
        .map(|(start, end)| &text[start..end])
        .collect())
}

fn tag_word(word: &str, prev: Option<PosTag>, sentence_start: bool, lexicon: &Lexicon) -> PosTag {
    let first = match word.chars().next() {
        Some(c) => c,
        None => return PosTag::Other,
    };
    let lower = word.to_lowercase();

    if !first.is_alphanumeric() && first != '_' {
        if lexicon.conjunctions.contains(&lower) {
            return PosTag::Conjunction;
        }
        if SYMBOLS.contains(&first) {
            return PosTag::Symbol;
        }
        return PosTag::Punctuation;
    }

    if is_numeric(word) {
        return PosTag::Numeral;
    }

    if is_all_caps(word) {
        return PosTag::ProperNoun;
    }

    if let Some(pos) = closed_class(&lower, lexicon) {
        return pos;
    }

    let capitalized = first.is_uppercase();

    if lexicon.verb_lemma(&lower).is_some() {
        if capitalized && !sentence_start {
            return PosTag::ProperNoun;
        }
        let after_modifier = matches!(
            prev,
            Some(PosTag::Determiner | PosTag::Adjective | PosTag::Numeral)
        );
        if after_modifier && !lower.ends_with("ed") {
            return PosTag::Noun;
        }
        return PosTag::Verb;
    }

    if lower.len() > 4 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }

    if capitalized {
        if sentence_start && has_adjective_suffix(&lower) {
            return PosTag::Adjective;
        }
        return PosTag::ProperNoun;
    }

    if lower.len() >= 5 && lower.ends_with("ed") && !lower.ends_with("eed") {
        return PosTag::Verb;
    }
    if lower.ends_with("ing") && matches!(prev, Some(PosTag::Aux)) {
        return PosTag::Verb;
    }
    if has_adjective_suffix(&lower) {
        return PosTag::Adjective;
    }

    PosTag::Noun
}

fn closed_class(lower: &str, lexicon: &Lexicon) -> Option<PosTag> {
    if lexicon.determiners.contains(lower) {
        Some(PosTag::Determiner)
    } else if lexicon.pronouns.contains(lower) {
        Some(PosTag::Pronoun)
    } else if lexicon.auxiliaries.contains(lower) {
        Some(PosTag::Aux)
    } else if lexicon.conjunctions.contains(lower) {
        Some(PosTag::Conjunction)
    } else if lexicon.prepositions.contains(lower) {
        Some(PosTag::Adposition)
    } else if lexicon.adverbs.contains(lower) {
        Some(PosTag::Adverb)
    } else {
        None
    }
}

fn is_numeric(word: &str) -> bool {
    word.chars().any(|c| c.is_numeric())
        && word
            .chars()
            .all(|c| c.is_numeric() || matches!(c, '.' | '-' | '\'' | '’'))
}

fn is_all_caps(word: &str) -> bool {
    let mut letters = 0;
    for c in word.chars() {
        if c.is_alphabetic() {
            if !c.is_uppercase() {
                return false;
            }
            letters += 1;
        }
    }
    letters >= 2
}

fn has_adjective_suffix(lower: &str) -> bool {
    lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s))
}
