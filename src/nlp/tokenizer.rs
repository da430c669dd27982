//! Rule-based tokenizer.
//!
//! Emails, URLs and technology names such as `node.js`, `c++` or `C#` stay
//! whole; everything else splits on whitespace and punctuation.

use super::document::Token;

/// Split `text` into tokens with byte offsets.
pub fn tokenize(text: &str) -> Vec<Token> {
    regex!(
        r"(?x)
          [A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}
        | (?:https?://)?(?:www\.)?[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.(?:com|org|net|io|dev|me|edu|co|in|ai)\b
          (?:/[A-Za-z0-9._~%/\#?=&+-]*[A-Za-z0-9/_\#-])?
        | [\p{L}\p{N}]+(?:[.'’+\#-][\p{L}\p{N}]+)*[+\#]*
        | [^\s\p{L}\p{N}]
        "
    )
    .find_iter(text)
    .map(|m| Token::new(m.as_str(), m.start()))
    .collect()
}
