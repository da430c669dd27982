//! Candidate name extraction.

use crate::nlp::{Entity, ParsedDocument, PosTag, Token};

/// Default number of leading tokens searched for a proper-noun pair.
pub const DEFAULT_NAME_WINDOW: usize = 50;

/// Words that look like proper nouns at the top of a resume but never
/// belong to a name.
const HEADING_WORDS: &[&str] = &[
    "curriculum", "vitae", "resume", "résumé", "cv", "profile", "contact", "summary",
    "objective", "personal", "details", "information", "address", "email", "phone", "mobile",
    "linkedin", "github", "page",
];

/// Extract the candidate's name.
///
/// An entity hint (from a custom entity model) wins when present. Otherwise
/// the first two consecutive proper nouns within the first `window` tokens
/// are returned. Middle initials (`R.` or a bare `R`) are stepped over, so
/// `Jane R. Doe` gives `Jane Doe`.
pub fn extract_name(doc: &ParsedDocument, hint: Option<&Entity>, window: usize) -> Option<String> {
    if let Some(entity) = hint {
        let name = entity.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !name.is_empty() {
            return Some(name);
        }
    }

    let limit = window.min(doc.tokens.len());
    without_initials(&doc.tokens[..limit])
        .windows(2)
        .find(|pair| is_name_part(pair[0]) && is_name_part(pair[1]))
        .map(|pair| format!("{} {}", pair[0].text, pair[1].text))
}

fn is_initial(token: &Token) -> bool {
    let mut chars = token.text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// Drop single-letter initials and the period that follows them.
fn without_initials(tokens: &[Token]) -> Vec<&Token> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if is_initial(&tokens[i]) {
            let dotted = tokens.get(i + 1).is_some_and(|t| t.text == ".");
            i += if dotted { 2 } else { 1 };
            continue;
        }
        kept.push(&tokens[i]);
        i += 1;
    }
    kept
}

fn is_name_part(token: &Token) -> bool {
    token.pos == PosTag::Propn
        && token.is_alpha()
        && token.text.chars().count() > 1
        && !HEADING_WORDS.contains(&token.lower.as_str())
}
