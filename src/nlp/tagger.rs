//! Sentence segmentation and part-of-speech tagging.

use std::collections::HashSet;

use super::document::{PosTag, Span, Token};
use super::lexicon::{
    is_stop_word, ADJECTIVES, ADPOSITIONS, AUXILIARIES, CONJUNCTIONS, DETERMINERS, PRONOUNS,
};

const TERMINATORS: &[&str] = &[".", "!", "?"];
const SEPARATORS: &[&str] = &["•", "|", "·", "*"];

/// Split tokens into sentences.
///
/// A sentence ends after `.`, `!` or `?`, at a bullet or pipe separator
/// (which is dropped), or where a line break separates two tokens.
pub fn split_sentences(text: &str, tokens: &[Token]) -> Vec<Span> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if i > start {
            let gap = text.get(tokens[i - 1].end()..token.offset).unwrap_or("");
            if gap.contains('\n') {
                sentences.push(Span::new(start, i));
                start = i;
            }
        }

        if SEPARATORS.contains(&token.text.as_str()) {
            if i > start {
                sentences.push(Span::new(start, i));
            }
            start = i + 1;
        } else if TERMINATORS.contains(&token.text.as_str()) {
            sentences.push(Span::new(start, i + 1));
            start = i + 1;
        }
    }

    if start < tokens.len() {
        sentences.push(Span::new(start, tokens.len()));
    }

    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Assign a part-of-speech tag and stop-word flag to every token.
pub fn tag(tokens: &mut [Token], sentences: &[Span]) {
    let sentence_starts: HashSet<usize> = sentences.iter().map(|s| s.start).collect();

    for (i, token) in tokens.iter_mut().enumerate() {
        token.is_stop = is_stop_word(&token.lower);
        token.pos = classify(token, sentence_starts.contains(&i));
    }
}

fn classify(token: &Token, sentence_start: bool) -> PosTag {
    let text = token.text.as_str();
    let lower = token.lower.as_str();

    if text.contains('@') || (text.contains('.') && text.contains('/')) {
        return PosTag::X;
    }
    if !text.chars().any(char::is_alphanumeric) {
        return if text.chars().all(|c| "$%&@#+*=<>~^€£".contains(c)) {
            PosTag::Sym
        } else {
            PosTag::Punct
        };
    }
    if !text.chars().any(char::is_alphabetic) {
        return PosTag::Num;
    }

    if DETERMINERS.contains(&lower) {
        return PosTag::Det;
    }
    if ADPOSITIONS.contains(&lower) {
        return PosTag::Adp;
    }
    if CONJUNCTIONS.contains(&lower) {
        return PosTag::Cconj;
    }
    if PRONOUNS.contains(&lower) {
        return PosTag::Pron;
    }
    if AUXILIARIES.contains(&lower) {
        return PosTag::Verb;
    }

    if token.is_capitalized() {
        // Bullet lines usually open with a past-tense verb ("Developed ...").
        if sentence_start && is_past_tense(lower) {
            return PosTag::Verb;
        }
        if sentence_start && ADJECTIVES.contains(&lower) {
            return PosTag::Adj;
        }
        return PosTag::Propn;
    }

    if ADJECTIVES.contains(&lower) {
        PosTag::Adj
    } else if lower.len() > 4 && lower.ends_with("ly") {
        PosTag::Adv
    } else if is_past_tense(lower) {
        PosTag::Verb
    } else if has_adjective_suffix(lower) {
        PosTag::Adj
    } else {
        PosTag::Noun
    }
}

fn is_past_tense(lower: &str) -> bool {
    lower.len() > 4 && lower.ends_with("ed") && lower.chars().all(char::is_alphabetic)
}

fn has_adjective_suffix(lower: &str) -> bool {
    lower.len() > 5
        && ["al", "ive", "ous", "ful", "able", "ible", "ic"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::tokenize;

    fn tagged(text: &str) -> Vec<(String, PosTag)> {
        let mut tokens = tokenize(text);
        let sentences = split_sentences(text, &tokens);
        tag(&mut tokens, &sentences);
        tokens.into_iter().map(|t| (t.text, t.pos)).collect()
    }

    #[test]
    fn test_split_on_terminators() {
        let text = "Built APIs. Led a team! Why?";
        let tokens = tokenize(text);
        let sentences = split_sentences(text, &tokens);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], Span::new(0, 3));
    }

    #[test]
    fn test_split_on_bullets_and_newlines() {
        let text = "Skills\n• Rust • Go";
        let tokens = tokenize(text);
        let sentences = split_sentences(text, &tokens);
        let words: Vec<&str> = sentences
            .iter()
            .map(|s| tokens[s.start].text.as_str())
            .collect();
        assert_eq!(words, vec!["Skills", "Rust", "Go"]);
    }

    #[test]
    fn test_tags() {
        let tags = tagged("Jane Doe developed the analytical engine in 2019.");
        assert_eq!(tags[0].1, PosTag::Propn);
        assert_eq!(tags[1].1, PosTag::Propn);
        assert_eq!(tags[2].1, PosTag::Verb);
        assert_eq!(tags[3].1, PosTag::Det);
        assert_eq!(tags[4].1, PosTag::Adj);
        assert_eq!(tags[5].1, PosTag::Noun);
        assert_eq!(tags[6].1, PosTag::Adp);
        assert_eq!(tags[7].1, PosTag::Num);
        assert_eq!(tags[8].1, PosTag::Punct);
    }

    #[test]
    fn test_sentence_initial_verb() {
        let tags = tagged("Developed services. Managed Kafka clusters.");
        assert_eq!(tags[0].1, PosTag::Verb);
        assert_eq!(tags[3].1, PosTag::Verb);
        assert_eq!(tags[4].1, PosTag::Propn);
    }

    #[test]
    fn test_contacts_are_other() {
        let tags = tagged("jane@example.com github.com/jane");
        assert!(tags.iter().all(|(_, pos)| *pos == PosTag::X));
    }

    #[test]
    fn test_stop_flags() {
        let mut tokens = tokenize("experience with Python");
        let sentences = split_sentences("experience with Python", &tokens);
        tag(&mut tokens, &sentences);
        let stops: Vec<bool> = tokens.iter().map(|t| t.is_stop).collect();
        assert_eq!(stops, vec![false, true, false]);
    }
}
