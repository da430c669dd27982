//! Noun-chunk detection over tagged tokens.

use super::document::{PosTag, Span, Token};

/// Find noun chunks: maximal runs of adjectives and nouns inside a sentence
/// that end on a noun or proper noun. Determiners and stop words break a run.
pub fn noun_chunks(tokens: &[Token], sentences: &[Span]) -> Vec<Span> {
    let mut chunks = Vec::new();

    for sentence in sentences {
        let mut i = sentence.start;
        while i < sentence.end {
            if !is_chunk_token(&tokens[i]) {
                i += 1;
                continue;
            }

            let start = i;
            while i < sentence.end && is_chunk_token(&tokens[i]) {
                i += 1;
            }

            let mut end = i;
            while end > start && tokens[end - 1].pos == PosTag::Adj {
                end -= 1;
            }
            if end > start {
                chunks.push(Span::new(start, end));
            }
        }
    }

    chunks
}

fn is_chunk_token(token: &Token) -> bool {
    token.pos.is_nominal() && !token.is_stop
}
