//! Degree and education extractors.

use crate::nlp::{Entity, ParsedDocument};

/// Degree names and abbreviations.
///
/// Dotted two-letter forms (`B.S`, `M.A`) require the dot so that `MS Office`
/// or a state code does not read as a degree.
pub const DEGREE_PATTERN: &str = r"\b(?:Ph\.?D|M\.?B\.?A|B\.?Tech|M\.?Tech|B\.?Eng|M\.?Eng|B\.?Sc|M\.?Sc|B\.?Com|M\.?Com|BCA|MCA|B\.E|M\.E|B\.S|M\.S|B\.A|M\.A)\b|\b(?i:bachelor|master|doctor)(?:'s|’s)?(?:\s+(?i:degree))?\s+(?i:of|in)\s+[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)?";

/// Education keywords, compared against upper-cased words with `?$.!,|`
/// stripped (so `B.E.` is looked up as `BE`).
const EDUCATION: &[&str] = &[
    "BE", "BS", "ME", "MS", "BTECH", "MTECH", "BSC", "MSC", "BCA", "MCA", "MBA", "PHD", "SSC",
    "HSC", "CBSE", "ICSE", "X", "XII",
];

/// Extract academic degrees.
///
/// Entity hints from a custom entity model win. Without hints, the text is
/// searched for degree names and abbreviations. Duplicates are dropped and
/// first-occurrence order kept.
pub fn extract_degree(doc: &ParsedDocument, hints: &[&Entity]) -> Option<Vec<String>> {
    let candidates: Vec<String> = if hints.is_empty() {
        regex!(DEGREE_PATTERN)
            .find_iter(&doc.text)
            .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
            .collect()
    } else {
        hints.iter().map(|e| e.text.trim().to_string()).collect()
    };

    let degrees = dedup_preserving_order(candidates);
    if degrees.is_empty() {
        None
    } else {
        Some(degrees)
    }
}

/// Extract education entries.
///
/// Each sentence is scanned for education keywords; a keyword is paired with
/// the first 19xx/20xx year in its sentence or the one after it. Entries
/// read `KEY` or `KEY (YEAR)`.
pub fn extract_education(doc: &ParsedDocument) -> Option<Vec<String>> {
    let sentences = doc.sentence_texts();
    let mut keys: Vec<(String, usize)> = Vec::new();

    for (index, sentence) in sentences.iter().enumerate() {
        for word in sentence.split_whitespace() {
            let stripped: String = word
                .chars()
                .filter(|c| !matches!(c, '?' | '|' | '$' | '.' | '!' | ','))
                .collect();
            if is_education_keyword(&stripped) && !keys.iter().any(|(k, _)| *k == stripped) {
                keys.push((stripped, index));
            }
        }
    }

    let entries: Vec<String> = keys
        .into_iter()
        .map(|(key, index)| {
            let context = match sentences.get(index + 1) {
                Some(next) => format!("{} {}", sentences[index], next),
                None => sentences[index].to_string(),
            };
            match regex!(r"\b(?:19|20)\d{2}\b").find(&context) {
                Some(year) => format!("{} ({})", key, year.as_str()),
                None => key,
            }
        })
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// Short keywords (`ME`, `X`) must be written upper-case to count; `me` or
/// `Be` are ordinary words.
fn is_education_keyword(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let upper = word.to_uppercase();
    EDUCATION.contains(&upper.as_str()) && (word.len() >= 3 || word == upper)
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_empty() && !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{HeuristicPipeline, LanguagePipeline};

    fn parse(text: &str) -> ParsedDocument {
        HeuristicPipeline::new().process(text)
    }

    #[test]
    fn test_degree_keywords() {
        let doc = parse(
            "Education B.Tech in Computer Science, IIT Delhi, 2016. \
             Master of Business Administration, 2020. Skills: MS Office",
        );
        assert_eq!(
            extract_degree(&doc, &[]),
            Some(vec![
                "B.Tech".to_string(),
                "Master of Business Administration".to_string()
            ])
        );
    }

    #[test]
    fn test_degree_hints_win() {
        let doc = parse("B.Tech, 2016");
        let hint = Entity {
            label: "Degree".into(),
            text: " Bachelor of Engineering ".into(),
            start: 0,
            end: 0,
        };
        assert_eq!(
            extract_degree(&doc, &[&hint, &hint]),
            Some(vec!["Bachelor of Engineering".to_string()])
        );
    }

    #[test]
    fn test_no_degree() {
        assert_eq!(extract_degree(&parse("Worked at Acme as an engineer"), &[]), None);
    }

    #[test]
    fn test_education_with_years() {
        let doc = parse("BTech, Computer Science. IIT Delhi 2012 - 2016. HSC from DPS, 2012");
        assert_eq!(
            extract_education(&doc),
            Some(vec!["BTech (2012)".to_string(), "HSC (2012)".to_string()])
        );
    }

    #[test]
    fn test_education_dotted_and_no_year() {
        let doc = parse("Degree: B.E. Mechanical");
        assert_eq!(extract_education(&doc), Some(vec!["BE".to_string()]));
    }

    #[test]
    fn test_education_ignores_common_words() {
        let doc = parse("Contact me to be part of the team, x");
        assert_eq!(extract_education(&doc), None);
    }
}
