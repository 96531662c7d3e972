//! Noun phrase chunking over tagged tokens.

use super::{NounChunk, PosTag, Token};

/// Collect maximal `DET? (ADJ|NUM)* (NOUN|PROPN)+` runs and standalone
/// pronouns. A chunk never crosses a line break.
pub(crate) fn noun_chunks(text: &str, tokens: &[Token]) -> Vec<NounChunk> {
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].pos == PosTag::Pronoun {
            chunks.push(chunk(text, &tokens[i], &tokens[i]));
            i += 1;
            continue;
        }

        let start = i;
        let mut j = i;
        let continues = |j: usize| j == start || same_line(text, &tokens[j - 1], &tokens[j]);

        if tokens[j].pos == PosTag::Determiner {
            j += 1;
        }
        while j < tokens.len()
            && matches!(tokens[j].pos, PosTag::Adjective | PosTag::Numeral)
            && continues(j)
        {
            j += 1;
        }
        let head_start = j;
        while j < tokens.len() && tokens[j].pos.is_nominal() && continues(j) {
            j += 1;
        }

        if j > head_start {
            chunks.push(chunk(text, &tokens[start], &tokens[j - 1]));
            i = j;
        } else {
            i = start + 1;
        }
    }

    chunks
}

fn same_line(text: &str, prev: &Token, next: &Token) -> bool {
    !text[prev.end..next.start].contains('\n')
}

fn chunk(text: &str, first: &Token, last: &Token) -> NounChunk {
    NounChunk {
        text: text[first.start..last.end].to_string(),
        start: first.start,
        end: last.end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::lexicon::Lexicon;
    use crate::nlp::tagger::Tagger;

    fn chunks(text: &str) -> Vec<String> {
        let lexicon = Lexicon::builtin().unwrap();
        let tokens = Tagger::new().unwrap().tag(text, &lexicon);
        noun_chunks(text, &tokens).into_iter().map(|c| c.text).collect()
    }

    #[test]
    fn test_determiner_adjective_noun() {
        assert_eq!(
            chunks("Built a scalable data pipeline for them"),
            vec!["a scalable data pipeline", "them"]
        );
    }

    #[test]
    fn test_numeral_in_chunk() {
        assert_eq!(chunks("Managed 5 engineers"), vec!["5 engineers"]);
    }

    #[test]
    fn test_chunks_stop_at_line_break() {
        assert_eq!(chunks("the team\nplatform"), vec!["the team", "platform"]);
    }

    #[test]
    fn test_dangling_determiner_skipped() {
        assert!(chunks("the .").is_empty());
    }
}
