//! Contact-detail extractors: email, phone, LinkedIn and GitHub.
//!
//! All four work on the whitespace-collapsed text and return the first match.

use regex::Regex;

/// Default phone pattern: optional `+CC` prefix, optional parenthesized area
/// code, `-`/`.`/space separators, or a bare 7-digit local number.
pub const DEFAULT_PHONE_PATTERN: &str = r"(?:\+\d{1,3}[-.\s]?)?(?:\(\d{3}\)[-.\s]?|\b\d{3}[-.\s]?)\d{3}[-.\s]?\d{4}\b|\b\d{3}[-.]\d{4}\b";

/// Extract the first email address.
pub fn extract_email(text: &str) -> Option<String> {
    regex!(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Extract the first phone number.
///
/// `custom` replaces the default pattern. When it has capture groups, the
/// participating groups are concatenated; otherwise the whole match is used.
pub fn extract_mobile_number(text: &str, custom: Option<&Regex>) -> Option<String> {
    let pattern = match custom {
        Some(re) => re,
        None => regex!(DEFAULT_PHONE_PATTERN),
    };

    let caps = pattern.captures(text)?;
    let raw = if caps.len() > 1 {
        caps.iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .collect::<String>()
    } else {
        caps.get(0)?.as_str().to_string()
    };

    let number = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if number.is_empty() {
        None
    } else {
        Some(number)
    }
}

/// Extract the first LinkedIn profile URL.
pub fn extract_linkedin(text: &str) -> Option<String> {
    regex!(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/in/[A-Za-z0-9_%-]+")
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Extract the first GitHub profile URL.
pub fn extract_github(text: &str) -> Option<String> {
    regex!(r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9](?:[A-Za-z0-9-]{0,38})")
        .find(text)
        .map(|m| m.as_str().to_string())
}
