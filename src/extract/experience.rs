//! Work-experience extractor.

use chrono::{Datelike, NaiveDate, Utc};

use crate::nlp::{ParsedDocument, PosTag};

/// Extract experience entries in document order.
///
/// Three kinds of evidence are collected:
/// - date ranges such as `Jan 2018 - Present` or `2015 to 2019` (ranges that
///   end before they start are dropped),
/// - duration phrases such as `5+ years of experience`,
/// - proper-noun runs containing the word "experience", reduced to the text
///   that follows it (`Work Experience Acme Corp` → `Acme Corp`).
pub fn extract_experience(doc: &ParsedDocument) -> Option<Vec<String>> {
    extract_experience_as_of(doc, Utc::now().date_naive())
}

/// Same as [`extract_experience`] with an explicit date for open-ended
/// ranges ("Present").
pub fn extract_experience_as_of(doc: &ParsedDocument, today: NaiveDate) -> Option<Vec<String>> {
    let mut entries: Vec<(usize, String)> = Vec::new();
    entries.extend(date_ranges(&doc.text, today));
    entries.extend(durations(&doc.text));
    entries.extend(titled_runs(doc));

    entries.sort_by_key(|(offset, _)| *offset);
    let mut seen: Vec<String> = Vec::with_capacity(entries.len());
    for (_, entry) in entries {
        if !seen.contains(&entry) {
            seen.push(entry);
        }
    }

    if seen.is_empty() {
        None
    } else {
        Some(seen)
    }
}

fn date_ranges(text: &str, today: NaiveDate) -> Vec<(usize, String)> {
    let re = regex!(
        r"(?ix)
        \b(?:(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?\s+|(\d{1,2})[/.])?
        ((?:19|20)\d{2})
        \s*(?:-|–|—|to|until|till)\s*
        (?:
            (?:(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?\s+|(\d{1,2})[/.])?((?:19|20)\d{2})
          | (present|current|now|today|date)
        )\b"
    );

    let mut ranges = Vec::new();
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };

        let start_month = month_of(caps.get(1).map(|m| m.as_str()), caps.get(2).map(|m| m.as_str()));
        let Some(start_year) = caps.get(3).and_then(|m| m.as_str().parse::<i32>().ok()) else {
            continue;
        };
        let start = (start_year, start_month.unwrap_or(1));

        let end = if caps.get(7).is_some() {
            (today.year(), today.month())
        } else {
            let end_month =
                month_of(caps.get(4).map(|m| m.as_str()), caps.get(5).map(|m| m.as_str()));
            match caps.get(6).and_then(|m| m.as_str().parse::<i32>().ok()) {
                Some(year) => (year, end_month.unwrap_or(12)),
                None => continue,
            }
        };

        if end < start {
            log::debug!("dropping inverted date range {:?}", whole.as_str());
            continue;
        }

        let entry = whole.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
        ranges.push((whole.start(), entry));
    }
    ranges
}

fn month_of(name: Option<&str>, number: Option<&str>) -> Option<u32> {
    if let Some(name) = name {
        let month = match name.to_ascii_lowercase().as_str() {
            "jan" => 1,
            "feb" => 2,
            "mar" => 3,
            "apr" => 4,
            "may" => 5,
            "jun" => 6,
            "jul" => 7,
            "aug" => 8,
            "sep" => 9,
            "oct" => 10,
            "nov" => 11,
            "dec" => 12,
            _ => return None,
        };
        return Some(month);
    }
    number
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|m| (1..=12).contains(m))
}

fn durations(text: &str) -> Vec<(usize, String)> {
    regex!(r"(?i)\b\d{1,2}(?:\.\d)?\+?\s*(?:years?|yrs?)(?:\s+of)?(?:\s+[a-z-]+){0,2}?\s+experience\b")
        .find_iter(text)
        .map(|m| {
            let entry = m.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
            (m.start(), entry)
        })
        .collect()
}

fn titled_runs(doc: &ParsedDocument) -> Vec<(usize, String)> {
    let mut runs = Vec::new();
    let tokens: Vec<_> = doc.tokens.iter().filter(|t| !t.is_stop).collect();

    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].pos != PosTag::Propn {
            i += 1;
            continue;
        }
        let start = i;
        while i < tokens.len() && tokens[i].pos == PosTag::Propn {
            i += 1;
        }
        let run = &tokens[start..i];
        if run.len() < 2 {
            continue;
        }

        if let Some(pos) = run.iter().position(|t| t.lower == "experience") {
            let rest = run[pos + 1..]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if !rest.is_empty() {
                runs.push((run[pos].offset, rest));
            }
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{HeuristicPipeline, LanguagePipeline};

    fn experience(text: &str) -> Option<Vec<String>> {
        let doc = HeuristicPipeline::new().process(text);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        extract_experience_as_of(&doc, today)
    }

    #[test]
    fn test_date_ranges() {
        let found = experience("Acme Corp, Jan 2018 - Present. Initech, 03/2015 to 12/2017.")
            .unwrap();
        assert_eq!(found, vec!["Jan 2018 - Present", "03/2015 to 12/2017"]);
    }

    #[test]
    fn test_inverted_range_dropped() {
        assert_eq!(experience("Globex 2019 - 2015"), None);
        assert_eq!(
            experience("Globex March 2019 - 2019"),
            Some(vec!["March 2019 - 2019".to_string()])
        );
    }

    #[test]
    fn test_durations() {
        assert_eq!(
            experience("Engineer with 5+ years of professional experience in backend work"),
            Some(vec!["5+ years of professional experience".to_string()])
        );
    }

    #[test]
    fn test_titled_runs() {
        assert_eq!(
            experience("Work Experience Acme Corp Backend Engineer. education"),
            Some(vec!["Acme Corp Backend Engineer".to_string()])
        );
    }

    #[test]
    fn test_none() {
        assert_eq!(experience("Hobbies include chess and hiking"), None);
        assert_eq!(experience("Work Experience"), None);
    }

    #[test]
    fn test_month_of() {
        assert_eq!(month_of(Some("Sept"), None), None);
        assert_eq!(month_of(Some("sep"), None), Some(9));
        assert_eq!(month_of(None, Some("13")), None);
        assert_eq!(month_of(None, Some("07")), Some(7));
        assert_eq!(month_of(None, None), None);
    }
}
