use regex::Regex;

use super::{char_before, line_end, DocumentInput, FieldExtractor};
use crate::error::Result;
use crate::record::Field;

const NUMBER_PATTERN: &str = r"\b[0-9]+\b";

/// Whitespace (line breaks included) then one word, anchored at the candidate
/// position.
const TRAILING_WORD_PATTERN: &str = r"^\s+(\w+)";

/// Words trailing the numbers of a line, e.g. `engineers` in
/// "Managed 12 engineers".
///
/// For every standalone number, the rest of its line is tried at each
/// position right after a digit; the first position followed by whitespace
/// and a word yields that word. The whitespace may run onto following lines,
/// so a number ending its line takes the first word of the next one.
/// Scanning resumes after the word.
#[derive(Debug, Clone)]
pub struct MeasurableResultsExtractor {
    number_re: Regex,
    trailing_re: Regex,
}

impl MeasurableResultsExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            number_re: Regex::new(NUMBER_PATTERN)?,
            trailing_re: Regex::new(TRAILING_WORD_PATTERN)?,
        })
    }

    /// First trailing word for the number ending at `from`, with the byte
    /// offset where it ends.
    fn trailing_word<'t>(&self, text: &'t str, from: usize) -> Option<(&'t str, usize)> {
        let eol = line_end(text, from);

        (from..=eol)
            .filter(|&pos| text.is_char_boundary(pos))
            .filter(|&pos| char_before(text, pos).is_some_and(|c| c.is_ascii_digit()))
            .find_map(|pos| {
                self.trailing_re
                    .captures(&text[pos..])
                    .and_then(|caps| caps.get(1))
                    .map(|word| (word.as_str(), pos + word.end()))
            })
    }
}

impl FieldExtractor for MeasurableResultsExtractor {
    type Output = Vec<String>;

    fn field(&self) -> Field {
        Field::MeasurableResults
    }

    fn extract(&self, input: &DocumentInput<'_>) -> Option<Vec<String>> {
        let text = input.text();
        let mut found = Vec::new();
        let mut cursor = 0;

        while let Some(number) = self.number_re.find_at(text, cursor) {
            match self.trailing_word(text, number.end()) {
                Some((word, end)) => {
                    found.push(word.to_string());
                    cursor = end;
                }
                None => cursor = number.end(),
            }
        }

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }
}
