use super::{DocumentInput, FieldExtractor};
use crate::nlp::PosTag;
use crate::record::Field;

/// Every verb token in the document, in order, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct CompetenciesExtractor;

impl CompetenciesExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for CompetenciesExtractor {
    type Output = Vec<String>;

    fn field(&self) -> Field {
        Field::Competencies
    }

    /// Always present; no verbs is an empty list.
    fn extract(&self, input: &DocumentInput<'_>) -> Option<Vec<String>> {
        Some(
            input
                .analysis()
                .tokens_tagged(PosTag::Verb)
                .map(|token| token.text.clone())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Analysis, Token};

    #[test]
    fn test_verbs_in_order_with_duplicates() {
        let analysis = Analysis {
            tokens: vec![
                Token::new("Led", PosTag::Verb, 0, 3),
                Token::new("teams", PosTag::Noun, 4, 9),
                Token::new("and", PosTag::Conjunction, 10, 13),
                Token::new("led", PosTag::Verb, 14, 17),
                Token::new("was", PosTag::Aux, 18, 21),
                Token::new("Led", PosTag::Verb, 22, 25),
            ],
            ..Default::default()
        };
        let input = DocumentInput::new("", &analysis);
        assert_eq!(
            CompetenciesExtractor::new().extract(&input),
            Some(vec!["Led".to_string(), "led".to_string(), "Led".to_string()])
        );
    }

    #[test]
    fn test_no_tokens_is_empty_list() {
        let analysis = Analysis::default();
        let input = DocumentInput::new("", &analysis);
        assert_eq!(CompetenciesExtractor::new().extract(&input), Some(vec![]));
    }
}
