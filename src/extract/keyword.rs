//! Keyword-triggered capitalized-word capture for education and experience.

use regex::Regex;

use super::{char_before, line_end, DocumentInput, FieldExtractor};
use crate::error::Result;
use crate::record::Field;

const EDUCATION_KEYWORDS: &[&str] = &["education", "qualification", "degree"];
const EXPERIENCE_KEYWORDS: &[&str] = &["experience"];

const CAPITALIZED_WORD: &str = r"[A-Z][a-z]+";

/// Collects capitalized words that follow a trigger keyword on the same line.
///
/// After a keyword (case-insensitive, whole word) the rest of its line is
/// scanned for the first `[A-Z][a-z]+` word that is preceded by whitespace
/// and followed by whitespace plus another capital letter. Every such word is
/// collected in order. Scanning resumes after the collected word, so one
/// keyword yields at most one word.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    field: Field,
    keyword_re: Regex,
    word_re: Regex,
}

impl KeywordExtractor {
    /// Triggered by "education", "qualification" or "degree".
    pub fn education() -> Result<Self> {
        Self::with_keywords(Field::Education, EDUCATION_KEYWORDS)
    }

    /// Triggered by "experience".
    pub fn experience() -> Result<Self> {
        Self::with_keywords(Field::Experience, EXPERIENCE_KEYWORDS)
    }

    /// Build an extractor for `field` from a custom keyword list.
    pub fn with_keywords(field: Field, keywords: &[&str]) -> Result<Self> {
        let alternatives = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            field,
            keyword_re: Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives))?,
            word_re: Regex::new(CAPITALIZED_WORD)?,
        })
    }

    /// First qualifying word in `text[from..to]`, as a byte range.
    fn capture_after(&self, text: &str, from: usize, to: usize) -> Option<(usize, usize)> {
        self.word_re
            .find_iter(&text[from..to])
            .map(|m| (from + m.start(), from + m.end()))
            .find(|&(start, end)| {
                char_before(text, start).is_some_and(char::is_whitespace)
                    && followed_by_capital(&text[end..])
            })
    }
}

/// Whitespace followed by an upper-case ASCII letter.
fn followed_by_capital(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next().is_some_and(char::is_whitespace) && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

impl FieldExtractor for KeywordExtractor {
    type Output = Vec<String>;

    fn field(&self) -> Field {
        self.field
    }

    fn extract(&self, input: &DocumentInput<'_>) -> Option<Vec<String>> {
        let text = input.text();
        let mut found = Vec::new();
        let mut cursor = 0;

        while let Some(keyword) = self.keyword_re.find_at(text, cursor) {
            let eol = line_end(text, keyword.end());
            match self.capture_after(text, keyword.end(), eol) {
                Some((start, end)) => {
                    found.push(text[start..end].to_string());
                    cursor = end;
                }
                None => cursor = keyword.end(),
            }
        }

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::Analysis;

    fn run(extractor: &KeywordExtractor, text: &str) -> Option<Vec<String>> {
        let analysis = Analysis::default();
        extractor.extract(&DocumentInput::new(text, &analysis))
    }

    #[test]
    fn test_education_capture() {
        let e = KeywordExtractor::education().unwrap();
        assert_eq!(
            run(&e, "EDUCATION: Bachelor of Science, Stanford University"),
            Some(vec!["Stanford".to_string()])
        );
    }

    #[test]
    fn test_education_all_keywords() {
        let e = KeywordExtractor::education().unwrap();
        let text = "Degree in Computer Science\nQualification: Certified Scrum Master";
        assert_eq!(
            run(&e, text),
            Some(vec!["Computer".to_string(), "Certified".to_string()])
        );
    }

    #[test]
    fn test_keyword_must_be_whole_word() {
        let e = KeywordExtractor::education().unwrap();
        assert_eq!(run(&e, "Degrees: Master Thesis"), None);
    }

    #[test]
    fn test_capture_stays_on_keyword_line() {
        let e = KeywordExtractor::education().unwrap();
        assert_eq!(run(&e, "Education\nHarvard Law School"), None);
    }

    #[test]
    fn test_following_capital_may_be_on_next_line() {
        let e = KeywordExtractor::experience().unwrap();
        assert_eq!(
            run(&e, "Experience at Google\nSenior engineer"),
            Some(vec!["Google".to_string()])
        );
    }

    #[test]
    fn test_experience_collects_each_match() {
        let e = KeywordExtractor::experience().unwrap();
        let text = "experience with Amazon Web Services\nMore experience at Acme Corp";
        assert_eq!(
            run(&e, text),
            Some(vec!["Amazon".to_string(), "Acme".to_string()])
        );
    }

    #[test]
    fn test_word_needs_whitespace_before() {
        let e = KeywordExtractor::experience().unwrap();
        assert_eq!(run(&e, "Experience:McDonald Corp"), None);
    }

    #[test]
    fn test_experience_absent() {
        let e = KeywordExtractor::experience().unwrap();
        assert_eq!(run(&e, "Experience: five years of python"), None);
        assert_eq!(run(&e, "no trigger here Big Company"), None);
    }

    #[test]
    fn test_fields() {
        assert_eq!(KeywordExtractor::education().unwrap().field(), Field::Education);
        assert_eq!(KeywordExtractor::experience().unwrap().field(), Field::Experience);
    }
}
