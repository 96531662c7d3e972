//! Entity recognition over tagged tokens.

use regex::Regex;

use crate::error::Result;

use super::lexicon::Lexicon;
use super::{EntityLabel, EntitySpan, PosTag, Token};

/// Longest run of title-case words still treated as a person name.
const MAX_NAME_WORDS: usize = 4;

/// Recognizes PERSON, ORG and DATE spans.
#[derive(Debug, Clone)]
pub(crate) struct EntityRecognizer {
    date_re: Regex,
}

impl EntityRecognizer {
    pub(crate) fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut months: Vec<&str> = lexicon.months.iter().map(String::as_str).collect();
        // Longest first so "september" wins over "sep".
        months.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let months = months
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = if months.is_empty() {
            r"\b(?:19|20)\d{2}\b".to_string()
        } else {
            format!(
                r"\b(?i:{})\.?,?\s+(?:19|20)\d{{2}}\b|\b(?:19|20)\d{{2}}\b",
                months
            )
        };

        Ok(Self {
            date_re: Regex::new(&pattern)?,
        })
    }

    pub(crate) fn recognize(&self, text: &str, tokens: &[Token], lexicon: &Lexicon) -> Vec<EntitySpan> {
        let mut entities = Vec::new();

        name_runs(text, tokens, lexicon, &mut entities);
        caps_name_lines(text, lexicon, &mut entities);
        entities.extend(
            self.date_re
                .find_iter(text)
                .map(|m| EntitySpan::new(EntityLabel::Date, m.as_str(), m.start(), m.end())),
        );

        entities.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
        entities
    }
}

/// Group adjacent title-case proper nouns on one line into PERSON or ORG spans.
fn name_runs(text: &str, tokens: &[Token], lexicon: &Lexicon, out: &mut Vec<EntitySpan>) {
    let mut run: Vec<&Token> = Vec::new();

    for token in tokens {
        let joins_run = match run.last() {
            Some(prev) => text[prev.end..token.start].chars().all(|c| c == ' ' || c == '\t'),
            None => true,
        };
        let candidate = is_name_word(token, lexicon) || is_org_suffix(token, lexicon);

        if !(candidate && joins_run) {
            flush_run(text, &run, lexicon, out);
            run.clear();
        }
        if candidate {
            run.push(token);
        }
    }
    flush_run(text, &run, lexicon, out);
}

fn flush_run(text: &str, run: &[&Token], lexicon: &Lexicon, out: &mut Vec<EntitySpan>) {
    let mut segment_start = 0;

    for (i, token) in run.iter().enumerate() {
        if is_org_suffix(token, lexicon) {
            if i > segment_start {
                out.push(span(text, EntityLabel::Org, run[segment_start], token));
            }
            segment_start = i + 1;
        }
    }

    let names = &run[segment_start..];
    if (2..=MAX_NAME_WORDS).contains(&names.len()) {
        out.push(span(text, EntityLabel::Person, names[0], names[names.len() - 1]));
    }
}

fn span(text: &str, label: EntityLabel, first: &Token, last: &Token) -> EntitySpan {
    EntitySpan::new(label, &text[first.start..last.end], first.start, last.end)
}

fn is_name_word(token: &Token, lexicon: &Lexicon) -> bool {
    token.pos == PosTag::ProperNoun && is_title_case(&token.text) && !is_excluded(&token.text, lexicon)
}

fn is_org_suffix(token: &Token, lexicon: &Lexicon) -> bool {
    token.text.chars().next().is_some_and(char::is_uppercase)
        && lexicon.org_suffixes.contains(&token.text.to_lowercase())
}

fn is_excluded(word: &str, lexicon: &Lexicon) -> bool {
    let lower = word.to_lowercase();
    lexicon.non_name_words.contains(&lower)
        || lexicon.org_suffixes.contains(&lower)
        || lexicon.months.contains(&lower)
        || lexicon.is_function_word(&lower)
        || lexicon.verb_lemma(&lower).is_some()
}

/// `Jane`, `O'Neil`, `Jean-Luc`: an upper-case letter, then lower-case
/// letters, with apostrophes or hyphens allowed between letter groups.
fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    if !chars.next().is_some_and(char::is_uppercase) {
        return false;
    }
    let mut prev_joiner = false;
    let mut letters = 1;
    for c in chars {
        if matches!(c, '\'' | '’' | '-') {
            if prev_joiner {
                return false;
            }
            prev_joiner = true;
            continue;
        }
        if !c.is_alphabetic() || (c.is_uppercase() && !prev_joiner) {
            return false;
        }
        prev_joiner = false;
        letters += 1;
    }
    letters >= 2 && !prev_joiner
}

/// A line holding nothing but two or three upper-case words, such as a
/// `JANE DOE` banner at the top of a resume.
fn caps_name_lines(text: &str, lexicon: &Lexicon, out: &mut Vec<EntitySpan>) {
    let mut offset = 0;
    for line in text.split('\n') {
        let line_start = offset;
        offset += line.len() + 1;

        let words: Vec<&str> = line.split_whitespace().collect();
        if !(2..=3).contains(&words.len()) {
            continue;
        }
        let all_names = words.iter().all(|w| {
            w.chars().count() >= 2
                && w.chars().all(|c| c.is_uppercase() || matches!(c, '\'' | '-'))
                && !is_excluded(w, lexicon)
        });
        if !all_names {
            continue;
        }

        let trimmed = line.trim();
        let start = line_start + (line.len() - line.trim_start().len());
        out.push(EntitySpan::new(
            EntityLabel::Person,
            trimmed,
            start,
            start + trimmed.len(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tagger::Tagger;

    fn entities(text: &str) -> Vec<(EntityLabel, String)> {
        let lexicon = Lexicon::builtin().unwrap();
        let tokens = Tagger::new().unwrap().tag(text, &lexicon);
        EntityRecognizer::new(&lexicon)
            .unwrap()
            .recognize(text, &tokens, &lexicon)
            .into_iter()
            .map(|e| (e.label, e.text))
            .collect()
    }

    #[test]
    fn test_person_from_title_case_line() {
        let found = entities("Jane Doe\nSoftware Engineer");
        assert_eq!(found, vec![(EntityLabel::Person, "Jane Doe".to_string())]);
    }

    #[test]
    fn test_caps_banner_is_person() {
        let found = entities("  JANE DOE\nSKILLS\n");
        assert_eq!(found, vec![(EntityLabel::Person, "JANE DOE".to_string())]);
    }

    #[test]
    fn test_org_suffix_makes_org() {
        let found = entities("Worked at Acme Corporation with Bob Lee");
        assert_eq!(
            found,
            vec![
                (EntityLabel::Org, "Acme Corporation".to_string()),
                (EntityLabel::Person, "Bob Lee".to_string()),
            ]
        );
    }

    #[test]
    fn test_names_do_not_span_lines() {
        let found = entities("Jane\nDoe");
        assert!(found.is_empty());
    }

    #[test]
    fn test_dates() {
        let found = entities("Engineer, Sept 2019 - 2021");
        assert_eq!(
            found,
            vec![
                (EntityLabel::Date, "Sept 2019".to_string()),
                (EntityLabel::Date, "2021".to_string()),
            ]
        );
    }

    #[test]
    fn test_phone_digits_are_not_dates() {
        assert!(entities("Call 9876543210 now").is_empty());
    }

    #[test]
    fn test_title_case_shapes() {
        assert!(is_title_case("Jane"));
        assert!(is_title_case("O'Neil"));
        assert!(is_title_case("Jean-Luc"));
        assert!(!is_title_case("JANE"));
        assert!(!is_title_case("McDonald"));
        assert!(!is_title_case("J"));
        assert!(!is_title_case("jane"));
    }
}
